//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod dashboard;
pub mod projects;
pub mod rab_items;
pub mod system;
pub mod transactions;
pub mod transfers;
pub mod wallets;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(system::routes())
        .merge(wallets::routes())
        .merge(projects::routes())
        .merge(rab_items::routes())
        .merge(transactions::routes())
        .merge(transfers::routes())
        .merge(dashboard::routes())
}
