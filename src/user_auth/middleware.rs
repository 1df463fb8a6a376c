//! JWT bearer authentication for the gateway.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::service::principal_from_claims;
use crate::gateway::{
    state::AppState,
    types::{ApiResponse, error_codes},
};

fn unauthorized(code: i32, msg: &str) -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::<()>::error(code, msg)),
    )
}

/// Verify the bearer token and inject a [`crate::authz::Principal`]
/// extension; handlers behind this layer never see an unauthenticated
/// request.
pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            unauthorized(error_codes::MISSING_AUTH, "Missing Authorization header")
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized(error_codes::AUTH_FAILED, "Invalid token format"))?;

    let claims = state
        .user_auth
        .verify_token(token)
        .map_err(|_| unauthorized(error_codes::AUTH_FAILED, "Invalid or expired token"))?;

    let principal = principal_from_claims(&claims)
        .map_err(|_| unauthorized(error_codes::AUTH_FAILED, "Invalid or expired token"))?;

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}
