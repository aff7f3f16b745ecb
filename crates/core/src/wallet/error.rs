//! Wallet error types.

use anggara_shared::types::WalletId;
use thiserror::Error;

/// Errors that can occur during wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Wallet name must not be empty.
    #[error("Wallet name must not be empty")]
    EmptyName,

    /// Account number must not be empty.
    #[error("Account number must not be empty")]
    EmptyAccountNumber,

    /// Wallet not found.
    #[error("Wallet not found: {0}")]
    NotFound(WalletId),

    /// Wallet still has ledger movements and cannot be deleted.
    #[error("Cannot delete wallet {wallet_id}: {count} movements reference it")]
    HasMovements {
        /// The wallet ID.
        wallet_id: WalletId,
        /// Number of transactions and transfers referencing the wallet.
        count: usize,
    },
}

impl WalletError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::EmptyAccountNumber => "EMPTY_ACCOUNT_NUMBER",
            Self::NotFound(_) => "WALLET_NOT_FOUND",
            Self::HasMovements { .. } => "WALLET_HAS_MOVEMENTS",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::EmptyName | Self::EmptyAccountNumber => 400,
            Self::NotFound(_) => 404,
            Self::HasMovements { .. } => 409,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(WalletError::EmptyName.http_status_code(), 400);
        assert_eq!(WalletError::NotFound(WalletId::new()).http_status_code(), 404);
        assert_eq!(
            WalletError::HasMovements {
                wallet_id: WalletId::new(),
                count: 3,
            }
            .http_status_code(),
            409
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(WalletError::EmptyName.error_code(), "EMPTY_NAME");
        assert_eq!(
            WalletError::NotFound(WalletId::new()).error_code(),
            "WALLET_NOT_FOUND"
        );
    }
}
