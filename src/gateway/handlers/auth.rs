//! Registration and login handlers
//!
//! Both endpoints are public and both hand back a bearer token on
//! success. Login failures are deliberately uniform: unknown username,
//! wrong password and a blocked account all produce the same 401.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResponse, ApiResult, AuthResponse, LoginRequest, RegisterRequest, ok,
};

/// Register a new account
///
/// Creates a USER-role account and returns a token, so the client is
/// signed in immediately.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Malformed username, email or password"),
        (status = 409, description = "Username or email already taken")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let (token, user) = state
        .user_auth
        .register(&req.username, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AuthResponse {
            token,
            user_id: user.id,
            username: user.username,
            role: user.role,
        })),
    ))
}

/// Exchange credentials for a token
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = AuthResponse),
        (status = 401, description = "Credentials rejected")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    let (token, user) = state.user_auth.login(&req.username, &req.password).await?;

    ok(AuthResponse {
        token,
        user_id: user.id,
        username: user.username,
        role: user.role,
    })
}
