//! Transaction routes.

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
use serde_json::json;
use tracing::info;

use anggara_core::ledger::{
    LedgerError, RecordTransactionInput, TransactionType,
};
use anggara_shared::types::{RabItemId, TransactionId, WalletId};
use anggara_store::{TransactionRepository, TransactionWithDisplay};

use crate::AppState;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(record_transaction))
        .route("/transactions/{id}", axum::routing::delete(delete_transaction))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct RecordTransactionRequest {
    /// Transaction date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Positive magnitude, as a decimal-safe string.
    pub amount: Decimal,
    /// Direction: "IN" or "OUT".
    pub transaction_type: TransactionType,
    /// Referenced wallet.
    pub account: WalletId,
    /// Optional linked budget line item.
    #[serde(default)]
    pub project_item: Option<RabItemId>,
}

/// Response for a transaction, with display projections.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: TransactionId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Positive magnitude.
    pub amount: Decimal,
    /// Direction of the movement.
    pub transaction_type: TransactionType,
    /// Referenced wallet.
    pub account: WalletId,
    /// Linked budget line item, when any.
    pub project_item: Option<RabItemId>,
    /// Referenced wallet's name (display only).
    pub wallet_name: String,
    /// Linked item's project name (display only).
    pub project_name: Option<String>,
}

impl From<TransactionWithDisplay> for TransactionResponse {
    fn from(row: TransactionWithDisplay) -> Self {
        Self {
            id: row.transaction.id,
            date: row.transaction.date,
            description: row.transaction.description,
            amount: row.transaction.amount,
            transaction_type: row.transaction.transaction_type,
            account: row.transaction.wallet_id,
            project_item: row.transaction.rab_item_id,
            wallet_name: row.wallet_name,
            project_name: row.project_name,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/transactions` - List transactions, newest first.
async fn list_transactions(State(state): State<AppState>) -> impl IntoResponse {
    let repo = TransactionRepository::new(state.store.clone());
    let transactions: Vec<TransactionResponse> =
        repo.list().into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(transactions))
}

/// POST `/transactions` - Record a transaction.
///
/// On success the wallet balance moves by the signed amount; a linked item
/// additionally has its realized spend and margin updated.
async fn record_transaction(
    State(state): State<AppState>,
    Json(payload): Json<RecordTransactionRequest>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new(state.store.clone());

    let input = RecordTransactionInput {
        date: payload.date,
        description: payload.description,
        amount: payload.amount,
        transaction_type: payload.transaction_type,
        wallet_id: payload.account,
        rab_item_id: payload.project_item,
    };

    match repo.record(input) {
        Ok(transaction) => {
            info!(
                transaction_id = %transaction.id,
                amount = %transaction.amount,
                "Transaction recorded via API"
            );
            (
                StatusCode::CREATED,
                Json(json!({
                    "id": transaction.id,
                    "date": transaction.date,
                    "description": transaction.description,
                    "amount": transaction.amount,
                    "transaction_type": transaction.transaction_type,
                    "account": transaction.wallet_id,
                    "project_item": transaction.rab_item_id
                })),
            )
                .into_response()
        }
        Err(e) => map_ledger_error(&e),
    }
}

/// DELETE `/transactions/{id}` - Delete a transaction, reversing its
/// effects.
///
/// There is no update-in-place: a correction is delete + record, so every
/// realized-spend change is attributable to a ledger append or removal.
async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new(state.store.clone());
    match repo.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => map_ledger_error(&e),
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Maps ledger errors to HTTP responses.
pub(crate) fn map_ledger_error(e: &LedgerError) -> axum::response::Response {
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
