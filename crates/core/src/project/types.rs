//! Project data types.

use anggara_shared::types::ProjectId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ProjectError;

/// Project lifecycle status.
///
/// Status transitions are user-driven; the engine never constrains them.
/// Only ACTIVE projects lock funds in the solvency view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    /// Project is running; its allocated budget counts as locked funds.
    Active,
    /// Project finished; its allocation no longer locks funds.
    Completed,
    /// Project abandoned; its allocation no longer locks funds.
    Cancelled,
}

impl ProjectStatus {
    /// Returns true if the project's allocated budget is treated as
    /// reserved cash.
    #[must_use]
    pub fn locks_funds(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A project and its RAB budget ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project ID.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Client the project is run for.
    pub client_name: String,
    /// Free-form description.
    pub description: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Planned budget ceiling, fixed at creation.
    pub allocated_budget: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a project.
#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    /// Project name.
    pub name: String,
    /// Client name.
    pub client_name: String,
    /// Free-form description.
    pub description: String,
    /// Planned budget ceiling.
    pub allocated_budget: Decimal,
    /// Initial status.
    pub status: ProjectStatus,
}

impl Project {
    /// Validates and creates a new project.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError` if the name is empty or the allocated budget
    /// is negative. A zero allocation is valid (its rollup reports 0% used).
    pub fn create(input: CreateProjectInput, created_at: DateTime<Utc>) -> Result<Self, ProjectError> {
        if input.name.trim().is_empty() {
            return Err(ProjectError::EmptyName);
        }
        if input.allocated_budget.is_sign_negative() {
            return Err(ProjectError::NegativeAllocatedBudget);
        }

        Ok(Self {
            id: ProjectId::new(),
            name: input.name,
            client_name: input.client_name,
            description: input.description,
            status: input.status,
            allocated_budget: input.allocated_budget,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn input(name: &str, budget: Decimal) -> CreateProjectInput {
        CreateProjectInput {
            name: name.to_string(),
            client_name: "PT Maju Jaya".to_string(),
            description: String::new(),
            allocated_budget: budget,
            status: ProjectStatus::Active,
        }
    }

    #[test]
    fn test_create_project() {
        let p = Project::create(input("Gedung A", dec!(4_000_000)), Utc::now()).unwrap();
        assert_eq!(p.allocated_budget, dec!(4_000_000));
        assert_eq!(p.status, ProjectStatus::Active);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_empty_name_rejected(#[case] name: &str) {
        let result = Project::create(input(name, dec!(100)), Utc::now());
        assert!(matches!(result, Err(ProjectError::EmptyName)));
    }

    #[test]
    fn test_negative_budget_rejected() {
        let result = Project::create(input("Gedung A", dec!(-1)), Utc::now());
        assert!(matches!(result, Err(ProjectError::NegativeAllocatedBudget)));
    }

    #[test]
    fn test_zero_budget_is_valid() {
        assert!(Project::create(input("Gedung A", Decimal::ZERO), Utc::now()).is_ok());
    }

    #[test]
    fn test_only_active_locks_funds() {
        assert!(ProjectStatus::Active.locks_funds());
        assert!(!ProjectStatus::Completed.locks_funds());
        assert!(!ProjectStatus::Cancelled.locks_funds());
    }

    #[test]
    fn test_status_serde_uppercase() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        let s: ProjectStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(s, ProjectStatus::Cancelled);
    }
}
