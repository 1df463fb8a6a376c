//! User profile and administration handlers
//!
//! Listing, status changes and deletion are admin operations; a single
//! profile is readable by its owner or an admin.

use std::sync::Arc;

use axum::{Extension, Json};
use axum::extract::{Path, Query, State};

use crate::authz::{self, Principal};
use crate::error::CoreError;
use crate::pagination::{Page, PageQuery};
use crate::users::UserService;

use super::super::state::AppState;
use super::super::types::{
    ApiResult, UserResponse, UserStatusFilter, UserStatusUpdateRequest, ok,
};

/// List users (admin)
#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(UserStatusFilter, PageQuery),
    responses(
        (status = 200, description = "One page of users, sorted by username", body = Page<UserResponse>),
        (status = 403, description = "Admin role required")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Query(filter): Query<UserStatusFilter>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Page<UserResponse>> {
    if !authz::has_admin_role(Some(&principal)) {
        return Err(CoreError::AccessDenied.into());
    }
    let users = UserService::list(state.db.pool(), filter.status, &page).await?;
    ok(users.map(UserResponse::from))
}

/// Profile of the authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Own profile", body = UserResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<UserResponse> {
    let user = UserService::get_by_id(state.db.pool(), principal.user_id).await?;
    ok(user.into())
}

/// Profile by id (owner or admin)
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 403, description = "Someone else's profile"),
        (status = 404, description = "No such user")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> ApiResult<UserResponse> {
    if !authz::is_owner_or_admin(Some(&principal), id) {
        return Err(CoreError::AccessDenied.into());
    }
    let user = UserService::get_by_id(state.db.pool(), id).await?;
    ok(user.into())
}

/// Change a user's status (admin)
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}/status",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserStatusUpdateRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserResponse),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "No such user")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn update_user_status(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Json(req): Json<UserStatusUpdateRequest>,
) -> ApiResult<UserResponse> {
    if !authz::has_admin_role(Some(&principal)) {
        return Err(CoreError::AccessDenied.into());
    }
    let user = UserService::update_status(state.db.pool(), id, req.status).await?;
    ok(user.into())
}

/// Delete a user (admin); refused while the user still owns cards
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User removed"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "No such user"),
        (status = 409, description = "User still owns cards")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    if !authz::has_admin_role(Some(&principal)) {
        return Err(CoreError::AccessDenied.into());
    }
    UserService::delete(state.db.pool(), id).await?;
    ok(())
}
