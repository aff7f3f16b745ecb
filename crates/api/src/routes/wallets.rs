//! Bank wallet routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use anggara_core::wallet::{CreateWalletInput, Wallet, WalletError};
use anggara_shared::types::WalletId;
use anggara_store::WalletRepository;

use crate::AppState;

/// Creates the wallet routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bank-accounts", get(list_wallets).post(create_wallet))
        .route("/bank-accounts/{id}", get(get_wallet).delete(delete_wallet))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a wallet.
#[derive(Debug, Deserialize)]
pub struct CreateWalletRequest {
    /// Display name (e.g. "BCA").
    pub name: String,
    /// External account reference.
    pub account_number: String,
    /// Opening balance, as a decimal-safe string.
    pub balance: Decimal,
}

/// Response for a wallet.
#[derive(Debug, Serialize)]
pub struct WalletResponse {
    /// Wallet ID.
    pub id: WalletId,
    /// Display name.
    pub name: String,
    /// External account reference.
    pub account_number: String,
    /// Current balance.
    pub balance: Decimal,
}

impl From<Wallet> for WalletResponse {
    fn from(wallet: Wallet) -> Self {
        Self {
            id: wallet.id,
            name: wallet.name,
            account_number: wallet.account_number,
            balance: wallet.balance,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/bank-accounts` - List wallets.
async fn list_wallets(State(state): State<AppState>) -> impl IntoResponse {
    let repo = WalletRepository::new(state.store.clone());
    let wallets: Vec<WalletResponse> = repo.list().into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(wallets))
}

/// GET `/bank-accounts/{id}` - Get one wallet.
async fn get_wallet(
    State(state): State<AppState>,
    Path(id): Path<WalletId>,
) -> impl IntoResponse {
    let repo = WalletRepository::new(state.store.clone());
    match repo.get(id) {
        Ok(wallet) => (StatusCode::OK, Json(WalletResponse::from(wallet))).into_response(),
        Err(e) => map_wallet_error(&e),
    }
}

/// POST `/bank-accounts` - Create a wallet.
async fn create_wallet(
    State(state): State<AppState>,
    Json(payload): Json<CreateWalletRequest>,
) -> impl IntoResponse {
    let repo = WalletRepository::new(state.store.clone());

    match repo.create(CreateWalletInput {
        name: payload.name,
        account_number: payload.account_number,
        opening_balance: payload.balance,
    }) {
        Ok(wallet) => {
            info!(wallet_id = %wallet.id, "Wallet created via API");
            (StatusCode::CREATED, Json(WalletResponse::from(wallet))).into_response()
        }
        Err(e) => map_wallet_error(&e),
    }
}

/// DELETE `/bank-accounts/{id}` - Delete a wallet.
///
/// Fails with a conflict while any transaction or transfer references the
/// wallet.
async fn delete_wallet(
    State(state): State<AppState>,
    Path(id): Path<WalletId>,
) -> impl IntoResponse {
    let repo = WalletRepository::new(state.store.clone());
    match repo.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => map_wallet_error(&e),
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Maps wallet errors to HTTP responses.
fn map_wallet_error(e: &WalletError) -> axum::response::Response {
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
