//! Project routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use anggara_core::project::{
    BudgetBand, CreateProjectInput, Project, ProjectError, ProjectRollup, ProjectStatus,
};
use anggara_core::rab::{CategoryGroup, RabService};
use anggara_shared::types::ProjectId;
use anggara_store::ProjectRepository;

use crate::AppState;
use crate::routes::rab_items::RabItemResponse;

/// Creates the project routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/{id}", get(get_project))
        .route("/projects/{id}/status", put(update_status))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a project.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name.
    pub name: String,
    /// Client name.
    #[serde(default)]
    pub client_name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Planned budget ceiling, as a decimal-safe string.
    pub allocated_budget: Decimal,
    /// Initial status; defaults to ACTIVE.
    #[serde(default = "default_status")]
    pub status: ProjectStatus,
}

fn default_status() -> ProjectStatus {
    ProjectStatus::Active
}

/// Request body for updating a project's status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// New lifecycle status.
    pub status: ProjectStatus,
}

/// Response for a project with its rollup.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    /// Project ID.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Client name.
    pub client_name: String,
    /// Free-form description.
    pub description: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Planned budget ceiling.
    pub allocated_budget: Decimal,
    /// Sum of realized spend over the project's items.
    pub total_spent: Decimal,
    /// Allocation minus total spent (negative when over budget).
    pub remaining_budget: Decimal,
    /// Utilization percentage (0 when the allocation is 0).
    pub percent_used: Decimal,
    /// Utilization band for presentation.
    pub band: BudgetBand,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl ProjectResponse {
    fn new(project: Project, rollup: &ProjectRollup) -> Self {
        Self {
            id: project.id,
            name: project.name,
            client_name: project.client_name,
            description: project.description,
            status: project.status,
            allocated_budget: project.allocated_budget,
            total_spent: rollup.total_spent,
            remaining_budget: rollup.remaining_budget,
            percent_used: rollup.percent_used,
            band: rollup.band,
            created_at: project.created_at.to_rfc3339(),
        }
    }
}

/// Response for one category group of a project's items.
#[derive(Debug, Serialize)]
pub struct CategoryGroupResponse {
    /// Category label.
    pub category: String,
    /// Sum of planned cost over the group.
    pub planned_total: Decimal,
    /// Sum of realized spend over the group.
    pub realized_total: Decimal,
    /// The items in the group.
    pub items: Vec<RabItemResponse>,
}

impl From<CategoryGroup> for CategoryGroupResponse {
    fn from(group: CategoryGroup) -> Self {
        Self {
            category: group.category,
            planned_total: group.planned_total,
            realized_total: group.realized_total,
            items: group.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response for a project detail: the project, its items, and the
/// category grouping.
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    /// The project with rollup fields.
    #[serde(flatten)]
    pub project: ProjectResponse,
    /// The project's items, oldest first.
    pub items: Vec<RabItemResponse>,
    /// The items grouped by category ("Uncategorized" fallback bucket).
    pub item_groups: Vec<CategoryGroupResponse>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/projects` - List projects with rollups, newest first.
async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ProjectRepository::new(state.store.clone());
    let projects: Vec<ProjectResponse> = repo
        .list()
        .into_iter()
        .map(|p| ProjectResponse::new(p.project, &p.rollup))
        .collect();
    (StatusCode::OK, Json(projects))
}

/// POST `/projects` - Create a project.
async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> impl IntoResponse {
    let repo = ProjectRepository::new(state.store.clone());

    match repo.create(CreateProjectInput {
        name: payload.name,
        client_name: payload.client_name,
        description: payload.description,
        allocated_budget: payload.allocated_budget,
        status: payload.status,
    }) {
        Ok(project) => {
            info!(project_id = %project.id, "Project created via API");
            let rollup = ProjectRollup::compute(project.allocated_budget, std::iter::empty::<Decimal>());
            (
                StatusCode::CREATED,
                Json(ProjectResponse::new(project, &rollup)),
            )
                .into_response()
        }
        Err(e) => map_project_error(&e),
    }
}

/// GET `/projects/{id}` - Get a project with its items and rollup.
async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> impl IntoResponse {
    let repo = ProjectRepository::new(state.store.clone());

    match repo.get(id) {
        Ok(detail) => {
            let item_groups: Vec<CategoryGroupResponse> =
                RabService::group_by_category(detail.items.clone())
                    .into_iter()
                    .map(Into::into)
                    .collect();
            let response = ProjectDetailResponse {
                project: ProjectResponse::new(detail.project, &detail.rollup),
                items: detail.items.into_iter().map(Into::into).collect(),
                item_groups,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => map_project_error(&e),
    }
}

/// PUT `/projects/{id}/status` - Update a project's lifecycle status.
///
/// Status transitions are user-driven and unconstrained; moving a project
/// out of ACTIVE releases its locked funds in the solvency view.
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    Json(payload): Json<UpdateStatusRequest>,
) -> impl IntoResponse {
    let repo = ProjectRepository::new(state.store.clone());

    match repo.update_status(id, payload.status) {
        Ok(project) => {
            info!(project_id = %id, status = ?payload.status, "Project status updated via API");
            (
                StatusCode::OK,
                Json(json!({
                    "id": project.id,
                    "status": project.status
                })),
            )
                .into_response()
        }
        Err(e) => map_project_error(&e),
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Maps project errors to HTTP responses.
fn map_project_error(e: &ProjectError) -> axum::response::Response {
    let status = StatusCode::from_u16(e.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": e.error_code(),
            "message": e.to_string()
        })),
    )
        .into_response()
}
