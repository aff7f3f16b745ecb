//! RAB line item service: creation validation and read-side grouping.

use anggara_shared::types::{ProjectId, RabItemId};
use rust_decimal::Decimal;

use super::error::RabError;
use super::pricing;
use super::types::{CategoryGroup, CreateRabItemInput, RabItem};

/// Fallback bucket for items with an empty or absent category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// RAB line item service.
///
/// Pure business logic with no storage dependencies. Reference checks are
/// injected as closures so the caller decides where project data lives.
pub struct RabService;

impl RabService {
    /// Validates the input and builds a new line item.
    ///
    /// The planned cost is computed via the quantity formula; realized
    /// spend starts at zero, so margin starts at the planned cost.
    ///
    /// # Errors
    ///
    /// Returns `RabError` if the owning project does not exist, any factor
    /// amount or the unit price is negative, or name/category is empty.
    /// Negative values are rejected, never clamped.
    pub fn create<P>(input: CreateRabItemInput, project_exists: P) -> Result<RabItem, RabError>
    where
        P: Fn(ProjectId) -> bool,
    {
        if input.name.trim().is_empty() {
            return Err(RabError::EmptyName);
        }
        if input.category.trim().is_empty() {
            return Err(RabError::EmptyCategory);
        }
        for (factor, amount) in [
            ("quantity", input.quantity.amount),
            ("volume", input.volume.amount),
            ("period", input.period.amount),
        ] {
            if amount.is_sign_negative() {
                return Err(RabError::NegativeFactor { factor });
            }
        }
        if input.unit_price.is_sign_negative() {
            return Err(RabError::NegativeUnitPrice);
        }
        if !project_exists(input.project_id) {
            return Err(RabError::ProjectNotFound(input.project_id));
        }

        let total_price = pricing::total_price(
            input.quantity.amount,
            input.volume.amount,
            input.period.amount,
            input.unit_price,
        );

        Ok(RabItem {
            id: RabItemId::new(),
            project_id: input.project_id,
            category: input.category,
            sub_category: input.sub_category,
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            volume: input.volume,
            period: input.period,
            unit_price: input.unit_price,
            total_price,
            realized_spend: Decimal::ZERO,
            margin: total_price,
        })
    }

    /// Groups items by category for display.
    ///
    /// A read-side projection only: the grouping is derived from each
    /// item's category string, with empty categories falling into the
    /// `UNCATEGORIZED` bucket. Groups are ordered by first appearance.
    #[must_use]
    pub fn group_by_category(items: Vec<RabItem>) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();

        for item in items {
            let label = if item.category.trim().is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                item.category.clone()
            };

            let idx = match groups.iter().position(|g| g.category == label) {
                Some(idx) => idx,
                None => {
                    groups.push(CategoryGroup {
                        category: label,
                        planned_total: Decimal::ZERO,
                        realized_total: Decimal::ZERO,
                        items: Vec::new(),
                    });
                    groups.len() - 1
                }
            };

            let group = &mut groups[idx];
            group.planned_total += item.total_price;
            group.realized_total += item.realized_spend;
            group.items.push(item);
        }

        groups
    }
}
