//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for wallets, projects, RAB items, transactions,
//!   transfers, and the solvency dashboard
//! - Request/response types with decimal-safe amount serialization
//! - Error mapping from domain errors to HTTP responses

pub mod routes;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use anggara_shared::AppError;
use anggara_store::Store;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared engine state.
    pub store: Store,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Fallback handler for unknown routes.
async fn not_found() -> impl IntoResponse {
    let error = AppError::NotFound("No such route".to_string());
    (
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::NOT_FOUND),
        Json(json!({
            "error": error.error_code(),
            "message": error.to_string()
        })),
    )
}
