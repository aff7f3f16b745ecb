//! Ledger service: validation and replay.
//!
//! Pure business logic with no storage dependencies. Reference checks are
//! injected as closures; the replay helpers re-derive materialized values
//! from the full ledger and back the repair path.

use anggara_shared::types::{RabItemId, WalletId};
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{RecordTransactionInput, RecordTransferInput, Transaction, Transfer};

/// Ledger service.
pub struct LedgerService;

impl LedgerService {
    /// Validates a transaction before it is recorded.
    ///
    /// Checks, in order: the amount is strictly positive, the wallet
    /// exists, and the linked item (if any) exists. The linked item's
    /// project is deliberately not required to be ACTIVE.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` naming the failing field.
    pub fn validate_record<W, I>(
        input: &RecordTransactionInput,
        wallet_exists: W,
        item_exists: I,
    ) -> Result<(), LedgerError>
    where
        W: Fn(WalletId) -> bool,
        I: Fn(RabItemId) -> bool,
    {
        if input.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount);
        }
        if !wallet_exists(input.wallet_id) {
            return Err(LedgerError::WalletNotFound(input.wallet_id));
        }
        if let Some(item_id) = input.rab_item_id {
            if !item_exists(item_id) {
                return Err(LedgerError::ItemNotFound(item_id));
            }
        }
        Ok(())
    }

    /// Validates a transfer before it is recorded.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the amount is non-positive, either wallet
    /// is unknown, or source and destination coincide.
    pub fn validate_transfer<W>(
        input: &RecordTransferInput,
        wallet_exists: W,
    ) -> Result<(), LedgerError>
    where
        W: Fn(WalletId) -> bool,
    {
        if input.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount);
        }
        if input.from_wallet_id == input.to_wallet_id {
            return Err(LedgerError::SameWalletTransfer);
        }
        if !wallet_exists(input.from_wallet_id) {
            return Err(LedgerError::WalletNotFound(input.from_wallet_id));
        }
        if !wallet_exists(input.to_wallet_id) {
            return Err(LedgerError::WalletNotFound(input.to_wallet_id));
        }
        Ok(())
    }

    /// Re-derives a line item's realized spend from the full ledger.
    ///
    /// Sums are commutative, so the result never depends on retrieval
    /// order.
    #[must_use]
    pub fn realized_spend<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        item_id: RabItemId,
    ) -> Decimal {
        transactions
            .into_iter()
            .filter(|tx| tx.rab_item_id == Some(item_id))
            .map(Transaction::budget_effect)
            .sum()
    }

    /// Re-derives a wallet's balance from the opening balance and the full
    /// ledger (transactions plus transfer legs).
    #[must_use]
    pub fn wallet_balance<'a>(
        opening_balance: Decimal,
        transactions: impl IntoIterator<Item = &'a Transaction>,
        transfers: impl IntoIterator<Item = &'a Transfer>,
        wallet_id: WalletId,
    ) -> Decimal {
        let from_transactions: Decimal = transactions
            .into_iter()
            .filter(|tx| tx.wallet_id == wallet_id)
            .map(Transaction::wallet_effect)
            .sum();
        let from_transfers: Decimal = transfers
            .into_iter()
            .map(|t| t.wallet_effect(wallet_id))
            .sum();

        opening_balance + from_transactions + from_transfers
    }
}
