//! Transfer and ledger handlers

use std::sync::Arc;

use axum::{Extension, Json};
use axum::extract::{Path, Query, State};
use validator::Validate;

use crate::authz::{self, Principal};
use crate::error::CoreError;
use crate::pagination::{Page, PageQuery};
use crate::transfers::TransferService;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, TransactionResponse, TransferRequest, ok};

/// Move money between two cards of the acting user
///
/// The engine resolves both cards under the acting user's scope, locks
/// them, runs the admission checks in a fixed order, moves the money and
/// writes one COMPLETED ledger row, all in a single transaction.
#[utoipa::path(
    post,
    path = "/api/v1/transfers",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer completed", body = TransactionResponse),
        (status = 400, description = "Non-positive amount or oversized description"),
        (status = 403, description = "Source card belongs to someone else, or self-transfer"),
        (status = 404, description = "Card does not resolve for the acting user"),
        (status = 409, description = "Insufficient funds or unusable card")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfers"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<TransferRequest>,
) -> ApiResult<TransactionResponse> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    if !authz::is_card_owner_or_admin(state.db.pool(), Some(&principal), req.from_card_id).await? {
        return Err(CoreError::AccessDenied.into());
    }

    let transaction = TransferService::transfer_between_own_cards(
        state.db.pool(),
        principal.user_id,
        req.from_card_id,
        req.to_card_id,
        req.amount,
        req.description,
    )
    .await?;

    ok(transaction.into())
}

/// The whole ledger, newest first (admin)
#[utoipa::path(
    get,
    path = "/api/v1/transfers",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of ledger rows", body = Page<TransactionResponse>),
        (status = 403, description = "Admin role required")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfers"
)]
pub async fn list_transfers(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Page<TransactionResponse>> {
    if !authz::has_admin_role(Some(&principal)) {
        return Err(CoreError::AccessDenied.into());
    }
    let transactions = TransferService::list_all(state.db.pool(), &page).await?;
    ok(transactions.map(TransactionResponse::from))
}

/// Every movement touching the user's cards (that user or admin)
#[utoipa::path(
    get,
    path = "/api/v1/transfers/user/{user_id}",
    params(("user_id" = i64, Path, description = "Owner id"), PageQuery),
    responses(
        (status = 200, description = "One page of the user's movements", body = Page<TransactionResponse>),
        (status = 403, description = "Someone else's history")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfers"
)]
pub async fn list_user_transfers(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(user_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Page<TransactionResponse>> {
    if !authz::is_owner_or_admin(Some(&principal), user_id) {
        return Err(CoreError::AccessDenied.into());
    }
    let transactions = TransferService::list_by_user(state.db.pool(), user_id, &page).await?;
    ok(transactions.map(TransactionResponse::from))
}

/// Every movement where the card is sender or receiver (owner or admin)
#[utoipa::path(
    get,
    path = "/api/v1/transfers/card/{card_id}",
    params(("card_id" = i64, Path, description = "Card id"), PageQuery),
    responses(
        (status = 200, description = "One page of the card's movements", body = Page<TransactionResponse>),
        (status = 403, description = "Someone else's card")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfers"
)]
pub async fn list_card_transfers(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(card_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Page<TransactionResponse>> {
    if !authz::is_card_owner_or_admin(state.db.pool(), Some(&principal), card_id).await? {
        return Err(CoreError::AccessDenied.into());
    }
    let transactions = TransferService::list_by_card(state.db.pool(), card_id, &page).await?;
    ok(transactions.map(TransactionResponse::from))
}
