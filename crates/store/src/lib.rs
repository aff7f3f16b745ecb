//! Materialized engine state and repositories for Anggara.
//!
//! The ledger (transactions and transfers) is the single source of truth.
//! Wallet balances and item realized-spend are materialized views over it,
//! maintained incrementally by the repositories and recoverable at any time
//! through [`Store::reconcile`].
//!
//! Concurrency: entities live in sharded concurrent maps whose per-entry
//! locking serializes every read-modify-write of a wallet balance or an
//! item's realized spend, as the engine's consistency contract requires.
//! No cross-entity atomicity is provided: a failure between the wallet
//! mutation and the item mutation leaves a recoverable inconsistency that
//! `reconcile` repairs by full replay.

pub mod repositories;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use anggara_core::ledger::{LedgerService, Transaction, Transfer};
use anggara_core::project::Project;
use anggara_core::rab::RabItem;
use anggara_core::wallet::Wallet;
use anggara_shared::types::{ProjectId, RabItemId, TransactionId, TransferId, WalletId};

pub use repositories::{
    ProjectDetail, ProjectRepository, ProjectWithRollup, RabItemRepository,
    TransactionRepository, TransactionWithDisplay, TransferRepository, WalletRepository,
};

/// Shared in-memory engine state.
///
/// Cheap to clone; all clones share the same underlying maps.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    wallets: DashMap<WalletId, Wallet>,
    projects: DashMap<ProjectId, Project>,
    items: DashMap<RabItemId, RabItem>,
    transactions: DashMap<TransactionId, Transaction>,
    transfers: DashMap<TransferId, Transfer>,
}

/// Outcome of a reconciliation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Wallets whose materialized balance had drifted from the ledger.
    pub wallets_corrected: usize,
    /// Items whose materialized realized-spend had drifted from the ledger.
    pub items_corrected: usize,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn wallets(&self) -> &DashMap<WalletId, Wallet> {
        &self.inner.wallets
    }

    pub(crate) fn projects(&self) -> &DashMap<ProjectId, Project> {
        &self.inner.projects
    }

    pub(crate) fn items(&self) -> &DashMap<RabItemId, RabItem> {
        &self.inner.items
    }

    pub(crate) fn transactions(&self) -> &DashMap<TransactionId, Transaction> {
        &self.inner.transactions
    }

    pub(crate) fn transfers(&self) -> &DashMap<TransferId, Transfer> {
        &self.inner.transfers
    }

    /// Recomputes every materialized value from the ledger.
    ///
    /// This is the repair path: replaying the full transaction and
    /// transfer sets always yields the correct balances and realized
    /// spend, regardless of how many times a prior partial mutation was
    /// applied or retried. Idempotent: a second pass corrects nothing.
    pub fn reconcile(&self) -> ReconcileReport {
        let transactions: Vec<Transaction> = self
            .inner
            .transactions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        let transfers: Vec<Transfer> = self
            .inner
            .transfers
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        let mut wallets_corrected = 0;
        for mut entry in self.inner.wallets.iter_mut() {
            let expected = LedgerService::wallet_balance(
                entry.opening_balance,
                &transactions,
                &transfers,
                entry.id,
            );
            if entry.balance != expected {
                entry.balance = expected;
                wallets_corrected += 1;
            }
        }

        let mut items_corrected = 0;
        for mut entry in self.inner.items.iter_mut() {
            let item_id = entry.id;
            let expected = LedgerService::realized_spend(&transactions, item_id);
            if entry.realized_spend != expected || entry.margin != entry.total_price - expected {
                entry.recompute_spend(
                    transactions
                        .iter()
                        .filter(|tx| tx.rab_item_id == Some(item_id))
                        .map(Transaction::budget_effect),
                );
                items_corrected += 1;
            }
        }

        let report = ReconcileReport {
            wallets_corrected,
            items_corrected,
        };
        info!(
            wallets_corrected = report.wallets_corrected,
            items_corrected = report.items_corrected,
            "Reconciliation pass completed"
        );
        report
    }
}
