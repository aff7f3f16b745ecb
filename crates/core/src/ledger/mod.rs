//! Cash transactions and transfers: the ledger.
//!
//! The ledger is the single source of truth for cash movement. Wallet
//! balances and item realized-spend are materialized views over it,
//! recoverable by full replay. This module provides:
//! - Transaction and transfer domain types
//! - Signed-effect derivation (wallet balance, budget realization)
//! - Validation for record and delete operations
//! - Replay helpers used by the repair path

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::LedgerService;
pub use types::{
    RecordTransactionInput, RecordTransferInput, Transaction, TransactionType, Transfer,
};
