//! Ledger error types.

use anggara_shared::types::{RabItemId, TransactionId, TransferId, WalletId};
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Amount must be strictly positive.
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// Referenced wallet not found.
    #[error("Wallet not found: {0}")]
    WalletNotFound(WalletId),

    /// Linked line item not found.
    #[error("Line item not found: {0}")]
    ItemNotFound(RabItemId),

    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    /// Transfer not found.
    #[error("Transfer not found: {0}")]
    TransferNotFound(TransferId),

    /// Source and destination wallets must differ.
    #[error("Source and destination wallets must differ")]
    SameWalletTransfer,
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::WalletNotFound(_) => "WALLET_NOT_FOUND",
            Self::ItemNotFound(_) => "ITEM_NOT_FOUND",
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::TransferNotFound(_) => "TRANSFER_NOT_FOUND",
            Self::SameWalletTransfer => "SAME_WALLET_TRANSFER",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // Bad references in a record request are validation failures.
            Self::NonPositiveAmount
            | Self::WalletNotFound(_)
            | Self::ItemNotFound(_)
            | Self::SameWalletTransfer => 400,

            // Deleting something that does not exist.
            Self::TransactionNotFound(_) | Self::TransferNotFound(_) => 404,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(LedgerError::NonPositiveAmount.http_status_code(), 400);
        assert_eq!(
            LedgerError::WalletNotFound(WalletId::new()).http_status_code(),
            400
        );
        assert_eq!(
            LedgerError::TransactionNotFound(TransactionId::new()).http_status_code(),
            404
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::NonPositiveAmount.error_code(), "NON_POSITIVE_AMOUNT");
        assert_eq!(LedgerError::SameWalletTransfer.error_code(), "SAME_WALLET_TRANSFER");
    }
}
