//! Wallet types.

use anggara_shared::types::WalletId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bank wallet: a bank account or cash drawer holding company funds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// Wallet ID.
    pub id: WalletId,
    /// Display name (e.g. "BCA", "Cash on hand").
    pub name: String,
    /// External account reference.
    pub account_number: String,
    /// Balance at creation, fixed thereafter. Kept so the running balance
    /// can always be recomputed from the ledger.
    pub opening_balance: Decimal,
    /// Running balance: `opening_balance` plus every signed movement.
    pub balance: Decimal,
}

/// Input for creating a wallet.
#[derive(Debug, Clone)]
pub struct CreateWalletInput {
    /// Display name.
    pub name: String,
    /// External account reference.
    pub account_number: String,
    /// Opening balance.
    pub opening_balance: Decimal,
}

impl Wallet {
    /// Opens a new wallet with its opening balance.
    #[must_use]
    pub fn open(input: CreateWalletInput) -> Self {
        Self {
            id: WalletId::new(),
            name: input.name,
            account_number: input.account_number,
            opening_balance: input.opening_balance,
            balance: input.opening_balance,
        }
    }

    /// Applies a signed balance delta (positive for inflow, negative for
    /// outflow).
    pub fn apply(&mut self, delta: Decimal) {
        self.balance += delta;
    }
}
