//! Bank wallets and balance mutation.
//!
//! A wallet's balance is a materialized view over the ledger: it equals the
//! opening balance plus the signed effect of every movement referencing the
//! wallet, and is always re-derivable by replay.

pub mod error;
pub mod types;

pub use error::WalletError;
pub use types::{CreateWalletInput, Wallet};
