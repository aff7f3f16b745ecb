//! End-to-end reconciliation scenarios across the repositories.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use anggara_core::ledger::{RecordTransactionInput, RecordTransferInput, TransactionType};
use anggara_core::project::{BudgetBand, CreateProjectInput, ProjectStatus};
use anggara_core::rab::{CreateRabItemInput, Factor};
use anggara_core::solvency::SolvencySnapshot;
use anggara_core::wallet::CreateWalletInput;
use anggara_shared::types::{ProjectId, RabItemId, WalletId};
use anggara_store::{
    ProjectRepository, RabItemRepository, Store, TransactionRepository, TransferRepository,
    WalletRepository,
};

struct Fixture {
    store: Store,
    wallets: WalletRepository,
    projects: ProjectRepository,
    items: RabItemRepository,
    transactions: TransactionRepository,
    transfers: TransferRepository,
}

impl Fixture {
    fn new() -> Self {
        let store = Store::new();
        Self {
            wallets: WalletRepository::new(store.clone()),
            projects: ProjectRepository::new(store.clone()),
            items: RabItemRepository::new(store.clone()),
            transactions: TransactionRepository::new(store.clone()),
            transfers: TransferRepository::new(store.clone()),
            store,
        }
    }

    fn wallet(&self, name: &str, opening: Decimal) -> WalletId {
        self.wallets
            .create(CreateWalletInput {
                name: name.to_string(),
                account_number: "8830-112".to_string(),
                opening_balance: opening,
            })
            .unwrap()
            .id
    }

    fn project(&self, name: &str, budget: Decimal) -> ProjectId {
        self.projects
            .create(CreateProjectInput {
                name: name.to_string(),
                client_name: "PT Maju Jaya".to_string(),
                description: String::new(),
                allocated_budget: budget,
                status: ProjectStatus::Active,
            })
            .unwrap()
            .id
    }

    fn item(&self, project_id: ProjectId) -> RabItemId {
        // quantity(2, pax) x volume(1, set) x period(3, day) x 100_000
        self.items
            .create(CreateRabItemInput {
                project_id,
                category: "Hall A".to_string(),
                sub_category: None,
                name: "Lighting".to_string(),
                description: String::new(),
                quantity: Factor {
                    amount: dec!(2),
                    unit: "pax".to_string(),
                },
                volume: Factor {
                    amount: dec!(1),
                    unit: "set".to_string(),
                },
                period: Factor {
                    amount: dec!(3),
                    unit: "day".to_string(),
                },
                unit_price: dec!(100_000),
            })
            .unwrap()
            .id
    }

    fn record_out(&self, wallet_id: WalletId, item_id: RabItemId, amount: Decimal) -> anggara_core::ledger::Transaction {
        self.transactions
            .record(RecordTransactionInput {
                date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                description: "Vendor payment".to_string(),
                amount,
                transaction_type: TransactionType::Out,
                wallet_id,
                rab_item_id: Some(item_id),
            })
            .unwrap()
    }

    fn solvency(&self) -> SolvencySnapshot {
        let wallets = self.wallets.list();
        let projects: Vec<_> = self
            .projects
            .list()
            .into_iter()
            .map(|p| p.project)
            .collect();
        SolvencySnapshot::compute(&wallets, &projects)
    }
}

#[test]
fn full_realization_scenario() {
    let fx = Fixture::new();

    let wallet_a = fx.wallet("Wallet A", dec!(10_000_000));
    let project_p = fx.project("Project P", dec!(4_000_000));
    let item_i = fx.item(project_p);

    let item = fx.items.get(item_i).unwrap();
    assert_eq!(item.total_price, dec!(600_000));

    fx.record_out(wallet_a, item_i, dec!(200_000));

    assert_eq!(fx.wallets.get(wallet_a).unwrap().balance, dec!(9_800_000));

    let item = fx.items.get(item_i).unwrap();
    assert_eq!(item.realized_spend, dec!(200_000));
    assert_eq!(item.margin, dec!(400_000));

    let detail = fx.projects.get(project_p).unwrap();
    assert_eq!(detail.rollup.total_spent, dec!(200_000));
    assert_eq!(detail.rollup.remaining_budget, dec!(3_800_000));
    assert_eq!(detail.rollup.band, BudgetBand::OnTrack);

    let snapshot = fx.solvency();
    assert_eq!(snapshot.total_assets, dec!(9_800_000));
    assert_eq!(snapshot.locked_funds, dec!(4_000_000));
    assert_eq!(snapshot.free_cash, dec!(5_800_000));
}

#[test]
fn deleting_the_transaction_restores_everything() {
    let fx = Fixture::new();

    let wallet_a = fx.wallet("Wallet A", dec!(10_000_000));
    let project_p = fx.project("Project P", dec!(4_000_000));
    let item_i = fx.item(project_p);

    let tx = fx.record_out(wallet_a, item_i, dec!(200_000));
    fx.transactions.delete(tx.id).unwrap();

    assert_eq!(fx.wallets.get(wallet_a).unwrap().balance, dec!(10_000_000));

    let item = fx.items.get(item_i).unwrap();
    assert_eq!(item.realized_spend, Decimal::ZERO);
    assert_eq!(item.margin, dec!(600_000));

    let detail = fx.projects.get(project_p).unwrap();
    assert_eq!(detail.rollup.total_spent, Decimal::ZERO);
    assert_eq!(detail.rollup.remaining_budget, dec!(4_000_000));
}

#[test]
fn zero_allocation_project_reports_zero_percent() {
    let fx = Fixture::new();
    let project = fx.project("Empty", Decimal::ZERO);

    let detail = fx.projects.get(project).unwrap();
    assert_eq!(detail.rollup.percent_used, Decimal::ZERO);
    assert_eq!(detail.rollup.remaining_budget, Decimal::ZERO);
}

#[test]
fn status_change_flips_solvency() {
    let fx = Fixture::new();
    fx.wallet("Wallet A", dec!(1_000_000));
    let project = fx.project("Big build", dec!(4_000_000));

    assert_eq!(fx.solvency().free_cash, dec!(-3_000_000));
    assert!(fx.solvency().has_warning());

    fx.projects
        .update_status(project, ProjectStatus::Completed)
        .unwrap();

    assert_eq!(fx.solvency().locked_funds, Decimal::ZERO);
    assert_eq!(fx.solvency().free_cash, dec!(1_000_000));
    assert!(!fx.solvency().has_warning());
}

#[test]
fn wallet_delete_conflicts_while_referenced() {
    let fx = Fixture::new();
    let wallet = fx.wallet("BCA", dec!(500_000));
    let project = fx.project("P", dec!(100_000));
    let item = fx.item(project);

    let tx = fx.record_out(wallet, item, dec!(50_000));
    assert!(fx.wallets.delete(wallet).is_err());

    // Once the ledger no longer references it, deletion goes through.
    fx.transactions.delete(tx.id).unwrap();
    fx.wallets.delete(wallet).unwrap();
}

#[test]
fn transfers_move_cash_without_touching_budgets() {
    let fx = Fixture::new();
    let bca = fx.wallet("BCA", dec!(1_000_000));
    let cash = fx.wallet("Cash", dec!(0));
    let project = fx.project("P", dec!(500_000));

    let assets_before = fx.solvency().total_assets;
    fx.transfers
        .record(RecordTransferInput {
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            description: "Petty cash".to_string(),
            amount: dec!(150_000),
            from_wallet_id: bca,
            to_wallet_id: cash,
        })
        .unwrap();

    assert_eq!(fx.solvency().total_assets, assets_before);
    assert_eq!(fx.wallets.get(cash).unwrap().balance, dec!(150_000));

    let detail = fx.projects.get(project).unwrap();
    assert_eq!(detail.rollup.total_spent, Decimal::ZERO);
}

#[test]
fn reconcile_is_a_no_op_on_consistent_state() {
    let fx = Fixture::new();
    let wallet = fx.wallet("BCA", dec!(10_000_000));
    let project = fx.project("P", dec!(4_000_000));
    let item = fx.item(project);

    fx.record_out(wallet, item, dec!(200_000));
    fx.record_out(wallet, item, dec!(75_000));

    let report = fx.store.reconcile();
    assert_eq!(report.wallets_corrected, 0);
    assert_eq!(report.items_corrected, 0);

    // Nothing moved.
    assert_eq!(fx.wallets.get(wallet).unwrap().balance, dec!(9_725_000));
    assert_eq!(fx.items.get(item).unwrap().realized_spend, dec!(275_000));
}
