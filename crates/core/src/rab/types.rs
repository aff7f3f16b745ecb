//! RAB line item data types.

use anggara_shared::types::{ProjectId, RabItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One multiplicative factor of a line item: an amount and its unit label.
///
/// The unit label ("pax", "m3", "day") is presentational; only the amount
/// enters the quantity formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Factor {
    /// Factor amount.
    pub amount: Decimal,
    /// Unit label.
    pub unit: String,
}

/// A budget line item within a project's RAB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RabItem {
    /// Item ID.
    pub id: RabItemId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Category used for read-side grouping.
    pub category: String,
    /// Optional sub-category.
    pub sub_category: Option<String>,
    /// Item name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Quantity factor.
    pub quantity: Factor,
    /// Volume factor.
    pub volume: Factor,
    /// Period factor.
    pub period: Factor,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Planned cost: quantity x volume x period x unit price.
    pub total_price: Decimal,
    /// Materialized sum of linked transactions' amounts.
    pub realized_spend: Decimal,
    /// Planned cost minus realized spend. Negative signals overrun;
    /// informational, never an error.
    pub margin: Decimal,
}

/// Input for creating a line item.
#[derive(Debug, Clone)]
pub struct CreateRabItemInput {
    /// Owning project.
    pub project_id: ProjectId,
    /// Category.
    pub category: String,
    /// Optional sub-category.
    pub sub_category: Option<String>,
    /// Item name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Quantity factor.
    pub quantity: Factor,
    /// Volume factor.
    pub volume: Factor,
    /// Period factor.
    pub period: Factor,
    /// Price per unit.
    pub unit_price: Decimal,
}

impl RabItem {
    /// Applies a realized-spend delta (positive when a linked transaction
    /// is recorded, negative when one is deleted) and recomputes margin.
    pub fn apply_spend(&mut self, delta: Decimal) {
        self.realized_spend += delta;
        self.margin = self.total_price - self.realized_spend;
    }

    /// Re-derives realized spend from the full set of linked transaction
    /// amounts, replacing whatever was materialized before.
    ///
    /// This is the repair path: realized spend is a cache of the ledger,
    /// never a second source of truth.
    pub fn recompute_spend(&mut self, linked_amounts: impl IntoIterator<Item = Decimal>) {
        self.realized_spend = linked_amounts.into_iter().sum();
        self.margin = self.total_price - self.realized_spend;
    }
}

/// A read-side grouping of items under one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Category label ("Uncategorized" for items without one).
    pub category: String,
    /// Sum of planned cost over the group.
    pub planned_total: Decimal,
    /// Sum of realized spend over the group.
    pub realized_total: Decimal,
    /// The items, in insertion order.
    pub items: Vec<RabItem>,
}
