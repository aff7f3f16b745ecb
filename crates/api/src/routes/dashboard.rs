//! Dashboard routes: the company solvency view.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use rust_decimal::Decimal;
use serde::Serialize;

use anggara_core::solvency::SolvencySnapshot;
use anggara_store::{ProjectRepository, WalletRepository};

use crate::AppState;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard/solvency", get(get_solvency))
}

/// Response for the solvency snapshot.
#[derive(Debug, Serialize)]
pub struct SolvencyResponse {
    /// Sum of every wallet's balance.
    pub total_assets: Decimal,
    /// Sum of allocated budgets over ACTIVE projects.
    pub locked_funds: Decimal,
    /// Total assets minus locked funds.
    pub free_cash: Decimal,
    /// Number of wallets aggregated.
    pub wallet_count: usize,
    /// Number of ACTIVE projects locking funds.
    pub active_project_count: usize,
    /// True when free cash is negative. Advisory only: the engine never
    /// blocks an operation because of it.
    pub solvency_warning: bool,
}

/// GET `/dashboard/solvency` - Compute the solvency snapshot.
///
/// A pure function of the current wallets and projects, recomputed on
/// every call and never persisted.
async fn get_solvency(State(state): State<AppState>) -> impl IntoResponse {
    let wallets = WalletRepository::new(state.store.clone()).list();
    let projects: Vec<_> = ProjectRepository::new(state.store.clone())
        .list()
        .into_iter()
        .map(|p| p.project)
        .collect();

    let snapshot = SolvencySnapshot::compute(&wallets, &projects);
    let response = SolvencyResponse {
        total_assets: snapshot.total_assets,
        locked_funds: snapshot.locked_funds,
        free_cash: snapshot.free_cash,
        wallet_count: snapshot.wallet_count,
        active_project_count: snapshot.active_project_count,
        solvency_warning: snapshot.has_warning(),
    };

    (StatusCode::OK, Json(response))
}
