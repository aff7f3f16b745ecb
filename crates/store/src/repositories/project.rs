//! Project repository.

use chrono::Utc;
use tracing::info;

use anggara_core::project::{
    CreateProjectInput, Project, ProjectError, ProjectRollup, ProjectStatus,
};
use anggara_core::rab::RabItem;
use anggara_shared::types::ProjectId;

use crate::Store;

/// A project with its on-demand rollup.
#[derive(Debug, Clone)]
pub struct ProjectWithRollup {
    /// The project record.
    pub project: Project,
    /// Budget-vs-actual aggregation, recomputed at read time.
    pub rollup: ProjectRollup,
}

/// A project with its item set and rollup.
#[derive(Debug, Clone)]
pub struct ProjectDetail {
    /// The project record.
    pub project: Project,
    /// The project's RAB items, oldest first.
    pub items: Vec<RabItem>,
    /// Budget-vs-actual aggregation, recomputed at read time.
    pub rollup: ProjectRollup,
}

/// Repository for projects.
#[derive(Clone)]
pub struct ProjectRepository {
    store: Store,
}

impl ProjectRepository {
    /// Creates a new repository over the shared store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError` on an empty name or negative allocation.
    pub fn create(&self, input: CreateProjectInput) -> Result<Project, ProjectError> {
        let project = Project::create(input, Utc::now())?;
        self.store.projects().insert(project.id, project.clone());

        info!(
            project_id = %project.id,
            name = %project.name,
            allocated_budget = %project.allocated_budget,
            "Project created"
        );
        Ok(project)
    }

    /// Lists all projects with their rollups, newest first.
    #[must_use]
    pub fn list(&self) -> Vec<ProjectWithRollup> {
        let mut projects: Vec<Project> = self
            .store
            .projects()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        projects
            .into_iter()
            .map(|project| {
                let rollup = self.rollup_for(&project);
                ProjectWithRollup { project, rollup }
            })
            .collect()
    }

    /// Returns a project with its items and rollup.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::NotFound` if the project does not exist.
    pub fn get(&self, id: ProjectId) -> Result<ProjectDetail, ProjectError> {
        let project = self
            .store
            .projects()
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(ProjectError::NotFound(id))?;

        let items = self.items_for(id);
        let rollup = ProjectRollup::compute(
            project.allocated_budget,
            items.iter().map(|item| item.realized_spend),
        );

        Ok(ProjectDetail {
            project,
            items,
            rollup,
        })
    }

    /// Updates a project's lifecycle status.
    ///
    /// Transitions are user-driven and unconstrained; the solvency view
    /// picks the change up on its next read.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::NotFound` if the project does not exist.
    pub fn update_status(
        &self,
        id: ProjectId,
        status: ProjectStatus,
    ) -> Result<Project, ProjectError> {
        let mut entry = self
            .store
            .projects()
            .get_mut(&id)
            .ok_or(ProjectError::NotFound(id))?;
        entry.status = status;
        let project = entry.clone();
        drop(entry);

        info!(project_id = %id, status = ?status, "Project status updated");
        Ok(project)
    }

    fn items_for(&self, id: ProjectId) -> Vec<RabItem> {
        let mut items: Vec<RabItem> = self
            .store
            .items()
            .iter()
            .filter(|entry| entry.project_id == id)
            .map(|entry| entry.value().clone())
            .collect();
        // Item IDs are time-ordered (UUID v7), so this is insertion order.
        items.sort_by_key(|item| item.id.into_inner());
        items
    }

    fn rollup_for(&self, project: &Project) -> ProjectRollup {
        ProjectRollup::compute(
            project.allocated_budget,
            self.store
                .items()
                .iter()
                .filter(|entry| entry.project_id == project.id)
                .map(|entry| entry.realized_spend),
        )
    }
}
