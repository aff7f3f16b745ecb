//! Transaction repository: the sole mutator of balances and realized spend.

use chrono::Utc;
use tracing::info;

use anggara_core::ledger::{LedgerError, LedgerService, RecordTransactionInput, Transaction};
use anggara_shared::types::{TransactionId, WalletId};

use crate::Store;

/// A transaction with display projections resolved at read time.
#[derive(Debug, Clone)]
pub struct TransactionWithDisplay {
    /// The ledger record.
    pub transaction: Transaction,
    /// Name of the referenced wallet.
    pub wallet_name: String,
    /// Name of the linked item's project, when linked.
    pub project_name: Option<String>,
}

/// Repository for ledger transactions.
#[derive(Clone)]
pub struct TransactionRepository {
    store: Store,
}

impl TransactionRepository {
    /// Creates a new repository over the shared store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Records a transaction and propagates its effects.
    ///
    /// On success the wallet balance moves by the signed amount and, when
    /// a line item is linked, that item's realized spend grows by the
    /// amount (margin recomputed). Each mutation happens under the
    /// entity's own entry lock; the ledger append comes last so a failure
    /// at any step is repairable by replay.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` on a non-positive amount or an unknown wallet
    /// or item reference.
    pub fn record(&self, input: RecordTransactionInput) -> Result<Transaction, LedgerError> {
        LedgerService::validate_record(
            &input,
            |wallet_id| self.store.wallets().contains_key(&wallet_id),
            |item_id| self.store.items().contains_key(&item_id),
        )?;

        let transaction = Transaction {
            id: TransactionId::new(),
            date: input.date,
            description: input.description,
            amount: input.amount,
            transaction_type: input.transaction_type,
            wallet_id: input.wallet_id,
            rab_item_id: input.rab_item_id,
            recorded_at: Utc::now(),
        };

        {
            let mut wallet = self
                .store
                .wallets()
                .get_mut(&transaction.wallet_id)
                .ok_or(LedgerError::WalletNotFound(transaction.wallet_id))?;
            wallet.apply(transaction.wallet_effect());
        }

        if let Some(item_id) = transaction.rab_item_id {
            if let Some(mut item) = self.store.items().get_mut(&item_id) {
                item.apply_spend(transaction.budget_effect());
            }
        }

        self.store
            .transactions()
            .insert(transaction.id, transaction.clone());

        info!(
            transaction_id = %transaction.id,
            wallet_id = %transaction.wallet_id,
            amount = %transaction.amount,
            transaction_type = ?transaction.transaction_type,
            linked = transaction.rab_item_id.is_some(),
            "Transaction recorded"
        );
        Ok(transaction)
    }

    /// Deletes a transaction, reversing both of its effects.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::TransactionNotFound` if the transaction does
    /// not exist.
    pub fn delete(&self, id: TransactionId) -> Result<(), LedgerError> {
        let (_, transaction) = self
            .store
            .transactions()
            .remove(&id)
            .ok_or(LedgerError::TransactionNotFound(id))?;

        if let Some(mut wallet) = self.store.wallets().get_mut(&transaction.wallet_id) {
            wallet.apply(-transaction.wallet_effect());
        }
        if let Some(item_id) = transaction.rab_item_id {
            if let Some(mut item) = self.store.items().get_mut(&item_id) {
                item.apply_spend(-transaction.budget_effect());
            }
        }

        info!(transaction_id = %id, "Transaction deleted");
        Ok(())
    }

    /// Lists transactions newest-first with display projections.
    ///
    /// Ordering is presentational only; aggregation is order-independent.
    #[must_use]
    pub fn list(&self) -> Vec<TransactionWithDisplay> {
        let mut transactions: Vec<Transaction> = self
            .store
            .transactions()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        transactions.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.recorded_at.cmp(&a.recorded_at))
        });

        transactions
            .into_iter()
            .map(|transaction| {
                let wallet_name = self.wallet_name(transaction.wallet_id);
                let project_name = transaction.rab_item_id.and_then(|item_id| {
                    let project_id = self.store.items().get(&item_id)?.project_id;
                    Some(self.store.projects().get(&project_id)?.name.clone())
                });
                TransactionWithDisplay {
                    transaction,
                    wallet_name,
                    project_name,
                }
            })
            .collect()
    }

    fn wallet_name(&self, wallet_id: WalletId) -> String {
        self.store
            .wallets()
            .get(&wallet_id)
            .map(|entry| entry.name.clone())
            .unwrap_or_default()
    }
}
