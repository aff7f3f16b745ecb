//! Repositories over the shared store.
//!
//! Each repository owns a cheap clone of the [`Store`](crate::Store) and
//! exposes the operations one resource supports. All validation is
//! delegated to the core services; the repositories add the per-row
//! mutation discipline and the read-side projections.

pub mod project;
pub mod rab_item;
pub mod transaction;
pub mod transfer;
pub mod wallet;

pub use project::{ProjectDetail, ProjectRepository, ProjectWithRollup};
pub use rab_item::RabItemRepository;
pub use transaction::{TransactionRepository, TransactionWithDisplay};
pub use transfer::TransferRepository;
pub use wallet::WalletRepository;
