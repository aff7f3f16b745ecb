//! Wallet repository.

use tracing::info;

use anggara_core::wallet::{CreateWalletInput, Wallet, WalletError};
use anggara_shared::types::WalletId;

use crate::Store;

/// Repository for bank wallets.
#[derive(Clone)]
pub struct WalletRepository {
    store: Store,
}

impl WalletRepository {
    /// Creates a new repository over the shared store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates a wallet with its opening balance.
    ///
    /// # Errors
    ///
    /// Returns `WalletError` if name or account number is empty.
    pub fn create(&self, input: CreateWalletInput) -> Result<Wallet, WalletError> {
        if input.name.trim().is_empty() {
            return Err(WalletError::EmptyName);
        }
        if input.account_number.trim().is_empty() {
            return Err(WalletError::EmptyAccountNumber);
        }

        let wallet = Wallet::open(input);
        self.store.wallets().insert(wallet.id, wallet.clone());

        info!(wallet_id = %wallet.id, name = %wallet.name, "Wallet created");
        Ok(wallet)
    }

    /// Lists all wallets, ordered by name.
    #[must_use]
    pub fn list(&self) -> Vec<Wallet> {
        let mut wallets: Vec<Wallet> = self
            .store
            .wallets()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        wallets.sort_by(|a, b| a.name.cmp(&b.name));
        wallets
    }

    /// Returns a wallet by ID.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::NotFound` if the wallet does not exist.
    pub fn get(&self, id: WalletId) -> Result<Wallet, WalletError> {
        self.store
            .wallets()
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(WalletError::NotFound(id))
    }

    /// Deletes a wallet.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::HasMovements` while any transaction or
    /// transfer references the wallet, `WalletError::NotFound` if it does
    /// not exist.
    pub fn delete(&self, id: WalletId) -> Result<(), WalletError> {
        if !self.store.wallets().contains_key(&id) {
            return Err(WalletError::NotFound(id));
        }

        let referencing_transactions = self
            .store
            .transactions()
            .iter()
            .filter(|entry| entry.wallet_id == id)
            .count();
        let referencing_transfers = self
            .store
            .transfers()
            .iter()
            .filter(|entry| entry.from_wallet_id == id || entry.to_wallet_id == id)
            .count();

        let count = referencing_transactions + referencing_transfers;
        if count > 0 {
            return Err(WalletError::HasMovements {
                wallet_id: id,
                count,
            });
        }

        self.store.wallets().remove(&id);
        info!(wallet_id = %id, "Wallet deleted");
        Ok(())
    }
}
