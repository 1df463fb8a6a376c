//! Unified API response envelope and the boundary error type.
//!
//! Every endpoint returns the same wrapper:
//! - Success: `{"code": 0, "msg": "ok", "data": {...}}`
//! - Error:   `{"code": 4004, "msg": "card 42 not found"}`
//!
//! `ApiError` carries the HTTP status alongside the envelope code so
//! handlers can bubble domain errors with `?` and still control the
//! status line.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::CoreError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const AUTH_FAILED: i32 = 2002;
    pub const FORBIDDEN: i32 = 2003;

    // Resource errors (4xxx)
    pub const NOT_FOUND: i32 = 4004;
    pub const CONFLICT: i32 = 4009;
    pub const STATE_CONFLICT: i32 = 4090;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

// ============================================================================
// Boundary Error
// ============================================================================

/// Handler result: success envelope or a boundary error.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Wrap `data` in the success envelope.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

/// HTTP status plus envelope code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    /// Shape-validation failure, before any service runs.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_PARAMETER,
            msg,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::error(self.code, self.msg));
        (self.status, body).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        use error_codes::*;

        let (status, code) = match &err {
            CoreError::UserNotFound(_)
            | CoreError::UsernameNotFound(_)
            | CoreError::CardNotFound(_)
            | CoreError::TransactionNotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND),

            CoreError::UsernameAlreadyExists(_) | CoreError::EmailAlreadyExists(_) => {
                (StatusCode::CONFLICT, CONFLICT)
            }

            CoreError::InvalidAmount(_) | CoreError::InvalidCardNumber => {
                (StatusCode::BAD_REQUEST, INVALID_PARAMETER)
            }

            CoreError::InsufficientFunds(_)
            | CoreError::CardBlocked(_)
            | CoreError::CardExpired(_)
            | CoreError::CardHasBalance(_)
            | CoreError::CardHasTransactions(_)
            | CoreError::UserHasCards(_) => (StatusCode::CONFLICT, STATE_CONFLICT),

            CoreError::UnauthorizedTransfer
            | CoreError::UnauthorizedStatusChange
            | CoreError::AccessDenied => (StatusCode::FORBIDDEN, FORBIDDEN),

            CoreError::InvalidCredentials => (StatusCode::UNAUTHORIZED, AUTH_FAILED),

            CoreError::CardEncryption | CoreError::Database(_) | CoreError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
            }
        };

        // Internals are logged server-side; clients get a generic message.
        let msg = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error at API boundary: {err}");
            "internal error".to_string()
        } else {
            err.to_string()
        };

        Self { status, code, msg }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn success_envelope_has_zero_code() {
        let resp = ApiResponse::success(42u32);
        assert_eq!(resp.code, error_codes::SUCCESS);
        assert_eq!(resp.msg, "ok");
        assert_eq!(resp.data, Some(42));
    }

    #[test]
    fn error_envelope_drops_data_field() {
        let resp = ApiResponse::<()>::error(error_codes::NOT_FOUND, "card 7 not found");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("4004"));
        assert!(!json.contains("data"));
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(CoreError::CardNotFound(7));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, error_codes::NOT_FOUND);
        assert!(err.msg.contains('7'));

        let err = ApiError::from(CoreError::TransactionNotFound(9));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, error_codes::NOT_FOUND);
    }

    #[test]
    fn duplicate_username_maps_to_409() {
        let err = ApiError::from(CoreError::UsernameAlreadyExists("ivan".into()));
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, error_codes::CONFLICT);
    }

    #[test]
    fn state_conflicts_share_their_own_code() {
        for err in [
            CoreError::InsufficientFunds(1),
            CoreError::CardBlocked(1),
            CoreError::CardExpired(1),
            CoreError::CardHasBalance(1),
            CoreError::CardHasTransactions(1),
            CoreError::UserHasCards(1),
        ] {
            let api = ApiError::from(err);
            assert_eq!(api.status, StatusCode::CONFLICT);
            assert_eq!(api.code, error_codes::STATE_CONFLICT);
        }
    }

    #[test]
    fn authorization_failures_map_to_403() {
        for err in [
            CoreError::UnauthorizedTransfer,
            CoreError::UnauthorizedStatusChange,
            CoreError::AccessDenied,
        ] {
            let api = ApiError::from(err);
            assert_eq!(api.status, StatusCode::FORBIDDEN);
            assert_eq!(api.code, error_codes::FORBIDDEN);
        }
    }

    #[test]
    fn bad_credentials_map_to_401() {
        let err = ApiError::from(CoreError::InvalidCredentials);
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.code, error_codes::AUTH_FAILED);
    }

    #[test]
    fn invalid_amount_maps_to_400() {
        let err = ApiError::from(CoreError::InvalidAmount(Decimal::new(-5, 0)));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::INVALID_PARAMETER);
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = ApiError::from(CoreError::Internal("pool exhausted".into()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, error_codes::INTERNAL_ERROR);
        assert_eq!(err.msg, "internal error");
    }
}
