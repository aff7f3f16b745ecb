//! Solvency snapshot types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::project::Project;
use crate::wallet::Wallet;

/// A point-in-time view of company liquidity.
///
/// Pure function of wallets and projects, recomputed on demand and never
/// persisted. A negative free cash is a valid, non-fatal state: the
/// snapshot is advisory and the engine never blocks project creation or
/// transaction recording because of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolvencySnapshot {
    /// Sum of every wallet's balance.
    pub total_assets: Decimal,
    /// Sum of allocated budgets over ACTIVE projects, treated as reserved
    /// cash.
    pub locked_funds: Decimal,
    /// Total assets minus locked funds: liquidity available to allocate.
    pub free_cash: Decimal,
    /// Number of wallets aggregated.
    pub wallet_count: usize,
    /// Number of ACTIVE projects locking funds.
    pub active_project_count: usize,
}

impl SolvencySnapshot {
    /// Computes the snapshot from the current wallets and projects.
    #[must_use]
    pub fn compute<'a>(
        wallets: impl IntoIterator<Item = &'a Wallet>,
        projects: impl IntoIterator<Item = &'a Project>,
    ) -> Self {
        let mut total_assets = Decimal::ZERO;
        let mut wallet_count = 0;
        for wallet in wallets {
            total_assets += wallet.balance;
            wallet_count += 1;
        }

        let mut locked_funds = Decimal::ZERO;
        let mut active_project_count = 0;
        for project in projects {
            if project.status.locks_funds() {
                locked_funds += project.allocated_budget;
                active_project_count += 1;
            }
        }

        Self {
            total_assets,
            locked_funds,
            free_cash: total_assets - locked_funds,
            wallet_count,
            active_project_count,
        }
    }

    /// Returns true when free cash has gone negative (solvency warning).
    #[must_use]
    pub fn has_warning(&self) -> bool {
        self.free_cash.is_sign_negative()
    }
}
