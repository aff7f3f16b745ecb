//! Transfer routes: wallet-to-wallet movements.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use anggara_core::ledger::{RecordTransferInput, Transfer};
use anggara_shared::types::{TransferId, WalletId};
use anggara_store::TransferRepository;

use crate::AppState;
use crate::routes::transactions::map_ledger_error;

/// Creates the transfer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transfers", get(list_transfers).post(record_transfer))
        .route("/transfers/{id}", axum::routing::delete(delete_transfer))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for recording a transfer.
#[derive(Debug, Deserialize)]
pub struct RecordTransferRequest {
    /// Transfer date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Positive magnitude, as a decimal-safe string.
    pub amount: Decimal,
    /// Source wallet (balance decreases).
    pub from_account: WalletId,
    /// Destination wallet (balance increases).
    pub to_account: WalletId,
}

/// Response for a transfer.
#[derive(Debug, Serialize)]
pub struct TransferResponse {
    /// Transfer ID.
    pub id: TransferId,
    /// Transfer date.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Positive magnitude.
    pub amount: Decimal,
    /// Source wallet.
    pub from_account: WalletId,
    /// Destination wallet.
    pub to_account: WalletId,
}

impl From<Transfer> for TransferResponse {
    fn from(transfer: Transfer) -> Self {
        Self {
            id: transfer.id,
            date: transfer.date,
            description: transfer.description,
            amount: transfer.amount,
            from_account: transfer.from_wallet_id,
            to_account: transfer.to_wallet_id,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/transfers` - List transfers, newest first.
async fn list_transfers(State(state): State<AppState>) -> impl IntoResponse {
    let repo = TransferRepository::new(state.store.clone());
    let transfers: Vec<TransferResponse> = repo.list().into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(transfers))
}

/// POST `/transfers` - Record a transfer between two wallets.
///
/// Transfers reshuffle cash without touching any project budget; total
/// assets are invariant under them.
async fn record_transfer(
    State(state): State<AppState>,
    Json(payload): Json<RecordTransferRequest>,
) -> impl IntoResponse {
    let repo = TransferRepository::new(state.store.clone());

    let input = RecordTransferInput {
        date: payload.date,
        description: payload.description,
        amount: payload.amount,
        from_wallet_id: payload.from_account,
        to_wallet_id: payload.to_account,
    };

    match repo.record(input) {
        Ok(transfer) => {
            info!(transfer_id = %transfer.id, amount = %transfer.amount, "Transfer recorded via API");
            (StatusCode::CREATED, Json(TransferResponse::from(transfer))).into_response()
        }
        Err(e) => map_ledger_error(&e),
    }
}

/// DELETE `/transfers/{id}` - Delete a transfer, reversing both legs.
async fn delete_transfer(
    State(state): State<AppState>,
    Path(id): Path<TransferId>,
) -> impl IntoResponse {
    let repo = TransferRepository::new(state.store.clone());
    match repo.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => map_ledger_error(&e),
    }
}
