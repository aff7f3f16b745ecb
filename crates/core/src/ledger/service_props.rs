//! Property tests for ledger replay and reversal.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use anggara_shared::types::{RabItemId, TransactionId, WalletId};

use super::service::LedgerService;
use super::types::{Transaction, TransactionType};

/// Strategy for positive amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn type_strategy() -> impl Strategy<Value = TransactionType> {
    prop_oneof![Just(TransactionType::In), Just(TransactionType::Out)]
}

/// Strategy for a ledger over one wallet and one item; roughly half the
/// transactions are linked.
fn ledger_strategy(
    wallet_id: WalletId,
    item_id: RabItemId,
    max_len: usize,
) -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        (amount_strategy(), type_strategy(), prop::bool::ANY),
        0..=max_len,
    )
    .prop_map(move |rows| {
        rows.into_iter()
            .map(|(amount, transaction_type, linked)| Transaction {
                id: TransactionId::new(),
                date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                description: String::new(),
                amount,
                transaction_type,
                wallet_id,
                rab_item_id: linked.then_some(item_id),
                recorded_at: Utc::now(),
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Recording then deleting the same transaction restores the prior
    /// balance and realized spend exactly (round-trip law).
    #[test]
    fn prop_record_then_delete_round_trips(
        amount in amount_strategy(),
        transaction_type in type_strategy(),
        opening in (-1_000_000i64..1_000_000).prop_map(|n| Decimal::new(n, 2)),
    ) {
        let wallet_id = WalletId::new();
        let item_id = RabItemId::new();
        let tx = Transaction {
            id: TransactionId::new(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            description: String::new(),
            amount,
            transaction_type,
            wallet_id,
            rab_item_id: Some(item_id),
            recorded_at: Utc::now(),
        };

        let mut balance = opening;
        let mut realized = Decimal::ZERO;

        balance += tx.wallet_effect();
        realized += tx.budget_effect();

        balance -= tx.wallet_effect();
        realized -= tx.budget_effect();

        prop_assert_eq!(balance, opening);
        prop_assert_eq!(realized, Decimal::ZERO);
    }

    /// Replay is order-independent: any permutation of the ledger derives
    /// the same balance and realized spend.
    #[test]
    fn prop_replay_is_order_independent(
        ledger in ledger_strategy(WalletId::new(), RabItemId::new(), 20),
    ) {
        prop_assume!(!ledger.is_empty());

        let wallet_id = ledger[0].wallet_id;
        let item_id = match ledger.iter().find_map(|tx| tx.rab_item_id) {
            Some(id) => id,
            None => RabItemId::new(),
        };

        let mut reversed = ledger.clone();
        reversed.reverse();

        let no_transfers: &[super::types::Transfer] = &[];
        prop_assert_eq!(
            LedgerService::wallet_balance(Decimal::ZERO, &ledger, no_transfers, wallet_id),
            LedgerService::wallet_balance(Decimal::ZERO, &reversed, no_transfers, wallet_id)
        );
        prop_assert_eq!(
            LedgerService::realized_spend(&ledger, item_id),
            LedgerService::realized_spend(&reversed, item_id)
        );
    }

    /// Full replay agrees with incremental application: deriving the
    /// balance from the whole ledger equals folding signed effects one at
    /// a time.
    #[test]
    fn prop_replay_equals_incremental(
        ledger in ledger_strategy(WalletId::new(), RabItemId::new(), 20),
        opening in (0i64..1_000_000).prop_map(|n| Decimal::new(n, 2)),
    ) {
        prop_assume!(!ledger.is_empty());
        let wallet_id = ledger[0].wallet_id;

        let incremental = ledger
            .iter()
            .fold(opening, |acc, tx| acc + tx.wallet_effect());

        let no_transfers: &[super::types::Transfer] = &[];
        prop_assert_eq!(
            LedgerService::wallet_balance(opening, &ledger, no_transfers, wallet_id),
            incremental
        );
    }

    /// Realized spend is non-negative for any ledger built from positive
    /// amounts, and zero for an item nothing links to.
    #[test]
    fn prop_realized_spend_non_negative(
        ledger in ledger_strategy(WalletId::new(), RabItemId::new(), 20),
    ) {
        let item_id = match ledger.iter().find_map(|tx| tx.rab_item_id) {
            Some(id) => id,
            None => RabItemId::new(),
        };

        let spend = LedgerService::realized_spend(&ledger, item_id);
        prop_assert!(spend >= Decimal::ZERO);
        prop_assert_eq!(
            LedgerService::realized_spend(&ledger, RabItemId::new()),
            Decimal::ZERO
        );
    }
}
