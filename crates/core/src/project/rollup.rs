//! Budget-vs-actual rollup for a project.
//!
//! The rollup is a pure read-side aggregation, recomputed on every read.
//! There is no cached state to invalidate: total spent is always the sum of
//! the project's items' realized spend at the moment of the call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Utilization band for presentation.
///
/// The bands are visual-only; the engine never blocks further spend at any
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBand {
    /// At most 90% of the allocation is used.
    OnTrack,
    /// More than 90% and at most 100% is used.
    Warning,
    /// More than 100% is used.
    OverBudget,
}

impl BudgetBand {
    /// Classifies a utilization percentage.
    #[must_use]
    pub fn classify(percent_used: Decimal) -> Self {
        let warning_threshold = Decimal::new(90, 0);
        if percent_used > Decimal::ONE_HUNDRED {
            Self::OverBudget
        } else if percent_used > warning_threshold {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }
}

/// A project's budget-vs-actual aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRollup {
    /// Sum of realized spend over the project's items.
    pub total_spent: Decimal,
    /// Allocated budget minus total spent. May be negative (over-budget is
    /// representable, not forbidden).
    pub remaining_budget: Decimal,
    /// Utilization percentage; 0 when the allocation is 0.
    pub percent_used: Decimal,
    /// Utilization band.
    pub band: BudgetBand,
}

impl ProjectRollup {
    /// Computes the rollup from the allocated budget and the items'
    /// realized spend.
    #[must_use]
    pub fn compute(
        allocated_budget: Decimal,
        realized: impl IntoIterator<Item = Decimal>,
    ) -> Self {
        let total_spent: Decimal = realized.into_iter().sum();
        let remaining_budget = allocated_budget - total_spent;
        let percent_used = if allocated_budget.is_zero() {
            Decimal::ZERO
        } else {
            (total_spent / allocated_budget) * Decimal::ONE_HUNDRED
        };

        Self {
            total_spent,
            remaining_budget,
            percent_used,
            band: BudgetBand::classify(percent_used),
        }
    }
}
