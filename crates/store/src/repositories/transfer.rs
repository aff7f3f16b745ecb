//! Transfer repository: wallet-to-wallet movements.

use chrono::Utc;
use tracing::info;

use anggara_core::ledger::{LedgerError, LedgerService, RecordTransferInput, Transfer};
use anggara_shared::types::TransferId;

use crate::Store;

/// Repository for wallet-to-wallet transfers.
#[derive(Clone)]
pub struct TransferRepository {
    store: Store,
}

impl TransferRepository {
    /// Creates a new repository over the shared store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Records a transfer, moving the amount between wallets.
    ///
    /// Transfers never touch a project budget: total assets are invariant
    /// under them. The two wallet mutations are taken one entry lock at a
    /// time; a failure in between is repairable by replay.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` on a non-positive amount, an unknown wallet,
    /// or identical source and destination.
    pub fn record(&self, input: RecordTransferInput) -> Result<Transfer, LedgerError> {
        LedgerService::validate_transfer(&input, |wallet_id| {
            self.store.wallets().contains_key(&wallet_id)
        })?;

        let transfer = Transfer {
            id: TransferId::new(),
            date: input.date,
            description: input.description,
            amount: input.amount,
            from_wallet_id: input.from_wallet_id,
            to_wallet_id: input.to_wallet_id,
            recorded_at: Utc::now(),
        };

        {
            let mut source = self
                .store
                .wallets()
                .get_mut(&transfer.from_wallet_id)
                .ok_or(LedgerError::WalletNotFound(transfer.from_wallet_id))?;
            source.apply(-transfer.amount);
        }
        {
            let mut destination = self
                .store
                .wallets()
                .get_mut(&transfer.to_wallet_id)
                .ok_or(LedgerError::WalletNotFound(transfer.to_wallet_id))?;
            destination.apply(transfer.amount);
        }

        self.store.transfers().insert(transfer.id, transfer.clone());

        info!(
            transfer_id = %transfer.id,
            from = %transfer.from_wallet_id,
            to = %transfer.to_wallet_id,
            amount = %transfer.amount,
            "Transfer recorded"
        );
        Ok(transfer)
    }

    /// Deletes a transfer, reversing both legs.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::TransferNotFound` if the transfer does not
    /// exist.
    pub fn delete(&self, id: TransferId) -> Result<(), LedgerError> {
        let (_, transfer) = self
            .store
            .transfers()
            .remove(&id)
            .ok_or(LedgerError::TransferNotFound(id))?;

        if let Some(mut source) = self.store.wallets().get_mut(&transfer.from_wallet_id) {
            source.apply(transfer.amount);
        }
        if let Some(mut destination) = self.store.wallets().get_mut(&transfer.to_wallet_id) {
            destination.apply(-transfer.amount);
        }

        info!(transfer_id = %id, "Transfer deleted");
        Ok(())
    }

    /// Lists transfers newest-first.
    #[must_use]
    pub fn list(&self) -> Vec<Transfer> {
        let mut transfers: Vec<Transfer> = self
            .store
            .transfers()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        transfers.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.recorded_at.cmp(&a.recorded_at))
        });
        transfers
    }
}
