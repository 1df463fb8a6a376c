//! Card lifecycle handlers
//!
//! Access is predicate-gated before any service call: owners reach
//! their own cards, admins reach everything. A false predicate becomes
//! a 403 without touching card state.

use std::sync::Arc;

use axum::{Extension, Json};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use crate::authz::{self, Principal};
use crate::cards::CardService;
use crate::error::CoreError;
use crate::pagination::{Page, PageQuery};

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResponse, ApiResult, CardCreateRequest, CardResponse, CardStatusFilter,
    CardStatusUpdateRequest, OwnerScope, ok,
};

/// Issue a new card for the authenticated user
///
/// The server picks the number, sets the expiry three years out and
/// starts the balance at zero.
#[utoipa::path(
    post,
    path = "/api/v1/cards",
    request_body = CardCreateRequest,
    responses(
        (status = 201, description = "Card issued", body = CardResponse),
        (status = 400, description = "Malformed card holder name")
    ),
    security(("bearer_auth" = [])),
    tag = "Cards"
)]
pub async fn create_card(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<CardCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CardResponse>>), ApiError> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let card = CardService::create_card(state.db.pool(), principal.user_id, &req.card_holder)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(card.into())),
    ))
}

/// One card by id (owner or admin)
#[utoipa::path(
    get,
    path = "/api/v1/cards/{id}",
    params(("id" = i64, Path, description = "Card id")),
    responses(
        (status = 200, description = "Card", body = CardResponse),
        (status = 403, description = "Someone else's card"),
        (status = 404, description = "No such card")
    ),
    security(("bearer_auth" = [])),
    tag = "Cards"
)]
pub async fn get_card(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> ApiResult<CardResponse> {
    if !authz::is_card_owner_or_admin(state.db.pool(), Some(&principal), id).await? {
        return Err(CoreError::AccessDenied.into());
    }
    let card = CardService::get_card(state.db.pool(), id).await?;
    ok(card.into())
}

/// Cards of one user (that user or admin)
#[utoipa::path(
    get,
    path = "/api/v1/cards/user/{user_id}",
    params(
        ("user_id" = i64, Path, description = "Owner id"),
        CardStatusFilter,
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of the user's cards", body = Page<CardResponse>),
        (status = 403, description = "Someone else's cards")
    ),
    security(("bearer_auth" = [])),
    tag = "Cards"
)]
pub async fn list_user_cards(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(user_id): Path<i64>,
    Query(filter): Query<CardStatusFilter>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Page<CardResponse>> {
    if !authz::is_owner_or_admin(Some(&principal), user_id) {
        return Err(CoreError::AccessDenied.into());
    }
    let cards = CardService::list_by_owner(state.db.pool(), user_id, filter.status, &page).await?;
    ok(cards.map(CardResponse::from))
}

/// Every card in the system (admin)
#[utoipa::path(
    get,
    path = "/api/v1/cards",
    params(CardStatusFilter, PageQuery),
    responses(
        (status = 200, description = "One page of cards, newest first", body = Page<CardResponse>),
        (status = 403, description = "Admin role required")
    ),
    security(("bearer_auth" = [])),
    tag = "Cards"
)]
pub async fn list_all_cards(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Query(filter): Query<CardStatusFilter>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Page<CardResponse>> {
    if !authz::has_admin_role(Some(&principal)) {
        return Err(CoreError::AccessDenied.into());
    }
    let cards = CardService::list_all(state.db.pool(), filter.status, &page).await?;
    ok(cards.map(CardResponse::from))
}

/// Change a card's status
///
/// Owners may block their own card; any other target status needs the
/// admin role. An expired card stays expired no matter who asks.
#[utoipa::path(
    patch,
    path = "/api/v1/cards/{id}/status",
    params(("id" = i64, Path, description = "Card id")),
    request_body = CardStatusUpdateRequest,
    responses(
        (status = 200, description = "Updated card", body = CardResponse),
        (status = 403, description = "Not allowed for this card or status"),
        (status = 404, description = "No such card")
    ),
    security(("bearer_auth" = [])),
    tag = "Cards"
)]
pub async fn update_card_status(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Json(req): Json<CardStatusUpdateRequest>,
) -> ApiResult<CardResponse> {
    if !authz::is_card_owner_or_admin(state.db.pool(), Some(&principal), id).await? {
        return Err(CoreError::AccessDenied.into());
    }
    let card = CardService::update_card_status(state.db.pool(), id, req.status, &principal).await?;
    ok(card.into())
}

/// Delete a card (admin), scoped to the given owner
///
/// Refused while the card holds money or appears in the ledger.
#[utoipa::path(
    delete,
    path = "/api/v1/cards/{id}",
    params(("id" = i64, Path, description = "Card id"), OwnerScope),
    responses(
        (status = 200, description = "Card removed"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "No such card for that owner"),
        (status = 409, description = "Card holds money or ledger history")
    ),
    security(("bearer_auth" = [])),
    tag = "Cards"
)]
pub async fn delete_card(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Query(scope): Query<OwnerScope>,
) -> ApiResult<()> {
    if !authz::has_admin_role(Some(&principal)) {
        return Err(CoreError::AccessDenied.into());
    }
    CardService::delete_card(state.db.pool(), id, scope.user_id).await?;
    ok(())
}
