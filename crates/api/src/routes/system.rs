//! Health check and system maintenance endpoints.

use axum::{Json, Router, extract::State, routing::{get, post}};
use serde::Serialize;
use tracing::info;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST `/system/reconcile` - Recompute every materialized value from the
/// ledger.
///
/// The repair path: balances and realized spend are caches of the ledger
/// and can always be re-derived, no matter how a prior partial mutation
/// was interrupted or retried.
async fn reconcile(State(state): State<AppState>) -> Json<anggara_store::ReconcileReport> {
    let report = state.store.reconcile();
    info!(
        wallets_corrected = report.wallets_corrected,
        items_corrected = report.items_corrected,
        "Manual reconciliation requested"
    );
    Json(report)
}

/// Creates system routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/system/reconcile", post(reconcile))
}
