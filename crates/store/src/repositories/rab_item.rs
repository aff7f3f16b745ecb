//! RAB line item repository.

use tracing::info;

use anggara_core::rab::{CreateRabItemInput, RabError, RabItem, RabService};
use anggara_shared::types::{ProjectId, RabItemId};

use crate::Store;

/// Repository for budget line items.
#[derive(Clone)]
pub struct RabItemRepository {
    store: Store,
}

impl RabItemRepository {
    /// Creates a new repository over the shared store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates a line item under its project.
    ///
    /// # Errors
    ///
    /// Returns `RabError` if validation fails or the owning project does
    /// not exist.
    pub fn create(&self, input: CreateRabItemInput) -> Result<RabItem, RabError> {
        let item = RabService::create(input, |project_id| {
            self.store.projects().contains_key(&project_id)
        })?;
        self.store.items().insert(item.id, item.clone());

        info!(
            item_id = %item.id,
            project_id = %item.project_id,
            total_price = %item.total_price,
            "RAB item created"
        );
        Ok(item)
    }

    /// Returns an item by ID.
    ///
    /// # Errors
    ///
    /// Returns `RabError::NotFound` if the item does not exist.
    pub fn get(&self, id: RabItemId) -> Result<RabItem, RabError> {
        self.store
            .items()
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(RabError::NotFound(id))
    }

    /// Lists items, optionally filtered by project, oldest first.
    #[must_use]
    pub fn list(&self, project_id: Option<ProjectId>) -> Vec<RabItem> {
        let mut items: Vec<RabItem> = self
            .store
            .items()
            .iter()
            .filter(|entry| project_id.is_none_or(|id| entry.project_id == id))
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|item| item.id.into_inner());
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use anggara_core::project::{CreateProjectInput, Project, ProjectStatus};
    use anggara_core::rab::Factor;

    fn seed_project(store: &Store) -> ProjectId {
        let project = Project::create(
            CreateProjectInput {
                name: "Gedung A".to_string(),
                client_name: "PT Maju Jaya".to_string(),
                description: String::new(),
                allocated_budget: dec!(4_000_000),
                status: ProjectStatus::Active,
            },
            Utc::now(),
        )
        .unwrap();
        let id = project.id;
        store.projects().insert(id, project);
        id
    }

    fn item_input(project_id: ProjectId, name: &str) -> CreateRabItemInput {
        CreateRabItemInput {
            project_id,
            category: "Hall A".to_string(),
            sub_category: None,
            name: name.to_string(),
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
        }
    }

    #[test]
    fn test_create_under_existing_project() {
        let store = Store::new();
        let project_id = seed_project(&store);
        let repo = RabItemRepository::new(store);

        let item = repo.create(item_input(project_id, "Lighting")).unwrap();
        assert_eq!(item.total_price, dec!(600_000));
        assert_eq!(repo.get(item.id).unwrap().name, "Lighting");
    }

    #[test]
    fn test_create_rejects_unknown_project() {
        let repo = RabItemRepository::new(Store::new());
        let result = repo.create(item_input(ProjectId::new(), "Lighting"));
        assert!(matches!(result, Err(RabError::ProjectNotFound(_))));
    }

    #[test]
    fn test_list_filters_by_project() {
        let store = Store::new();
        let project_a = seed_project(&store);
        let project_b = seed_project(&store);
        let repo = RabItemRepository::new(store);

        repo.create(item_input(project_a, "Lighting")).unwrap();
        repo.create(item_input(project_a, "Sound")).unwrap();
        repo.create(item_input(project_b, "Catering")).unwrap();

        assert_eq!(repo.list(Some(project_a)).len(), 2);
        assert_eq!(repo.list(Some(project_b)).len(), 1);
        assert_eq!(repo.list(None).len(), 3);
    }
}
