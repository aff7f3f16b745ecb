//! RAB line item routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use anggara_core::rab::{CreateRabItemInput, Factor, RabError, RabItem};
use anggara_shared::types::{ProjectId, RabItemId};
use anggara_store::RabItemRepository;

use crate::AppState;

/// Creates the line item routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/project-items", get(list_items).post(create_item))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a line item.
///
/// The factor field names mirror the cost-calculator form: amount and unit
/// label per factor.
#[derive(Debug, Deserialize)]
pub struct CreateRabItemRequest {
    /// Owning project.
    pub project: ProjectId,
    /// Category (e.g. "Hall A").
    pub category: String,
    /// Optional sub-category.
    #[serde(default)]
    pub sub_category: Option<String>,
    /// Item name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Quantity amount.
    pub qty_amount: Decimal,
    /// Quantity unit label.
    pub qty_unit: String,
    /// Volume amount.
    pub volume_amount: Decimal,
    /// Volume unit label.
    pub volume_unit: String,
    /// Period amount.
    pub period_amount: Decimal,
    /// Period unit label.
    pub period_unit: String,
    /// Price per unit, as a decimal-safe string.
    pub unit_price: Decimal,
}

/// Query parameters for listing items.
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    /// Restrict to one project.
    pub project: Option<ProjectId>,
}

/// Response for a line item with its derived fields.
#[derive(Debug, Serialize)]
pub struct RabItemResponse {
    /// Item ID.
    pub id: RabItemId,
    /// Owning project.
    pub project: ProjectId,
    /// Category.
    pub category: String,
    /// Optional sub-category.
    pub sub_category: Option<String>,
    /// Item name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Quantity amount.
    pub qty_amount: Decimal,
    /// Quantity unit label.
    pub qty_unit: String,
    /// Volume amount.
    pub volume_amount: Decimal,
    /// Volume unit label.
    pub volume_unit: String,
    /// Period amount.
    pub period_amount: Decimal,
    /// Period unit label.
    pub period_unit: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Planned cost (derived).
    pub total_price: Decimal,
    /// Realized spend (derived).
    pub realized_spend: Decimal,
    /// Planned cost minus realized spend (derived).
    pub margin: Decimal,
}

impl From<RabItem> for RabItemResponse {
    fn from(item: RabItem) -> Self {
        Self {
            id: item.id,
            project: item.project_id,
            category: item.category,
            sub_category: item.sub_category,
            name: item.name,
            description: item.description,
            qty_amount: item.quantity.amount,
            qty_unit: item.quantity.unit,
            volume_amount: item.volume.amount,
            volume_unit: item.volume.unit,
            period_amount: item.period.amount,
            period_unit: item.period.unit,
            unit_price: item.unit_price,
            total_price: item.total_price,
            realized_spend: item.realized_spend,
            margin: item.margin,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/project-items` - List items, optionally filtered by project.
async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> impl IntoResponse {
    let repo = RabItemRepository::new(state.store.clone());
    let items: Vec<RabItemResponse> = repo
        .list(query.project)
        .into_iter()
        .map(Into::into)
        .collect();
    (StatusCode::OK, Json(items))
}

/// POST `/project-items` - Create a line item.
async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateRabItemRequest>,
) -> impl IntoResponse {
    let repo = RabItemRepository::new(state.store.clone());

    let input = CreateRabItemInput {
        project_id: payload.project,
        category: payload.category,
        sub_category: payload.sub_category,
        name: payload.name,
        description: payload.description,
        quantity: Factor {
            amount: payload.qty_amount,
            unit: payload.qty_unit,
        },
        volume: Factor {
            amount: payload.volume_amount,
            unit: payload.volume_unit,
        },
        period: Factor {
            amount: payload.period_amount,
            unit: payload.period_unit,
        },
        unit_price: payload.unit_price,
    };

    match repo.create(input) {
        Ok(item) => {
            info!(item_id = %item.id, total_price = %item.total_price, "RAB item created via API");
            (StatusCode::CREATED, Json(RabItemResponse::from(item))).into_response()
        }
        Err(e) => map_rab_error(&e),
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Maps line item errors to HTTP responses.
fn map_rab_error(e: &RabError) -> axum::response::Response {
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
