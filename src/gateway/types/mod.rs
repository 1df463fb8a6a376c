//! Gateway types module
//!
//! Type-safe DTOs for the API boundary:
//!
//! ## Input Types
//! - [`RegisterRequest`] / [`LoginRequest`]: auth payloads
//! - [`CardCreateRequest`] / [`CardStatusUpdateRequest`]: card payloads
//! - [`TransferRequest`]: transfer payload
//! - [`CardStatusFilter`] / [`UserStatusFilter`] / [`OwnerScope`]: query params
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: unified response wrapper
//! - [`UserResponse`] / [`CardResponse`] / [`TransactionResponse`]: row views
//! - [`AuthResponse`]: issued token plus identity
//!
//! ## Submodules
//! - [`requests`]: request DTOs and shape validation
//! - [`responses`]: response DTOs
//! - [`response`]: envelope, error codes, boundary error

pub mod requests;
pub mod response;
pub mod responses;

// Re-export commonly used types at module root
pub use requests::{
    CardCreateRequest, CardStatusFilter, CardStatusUpdateRequest, LoginRequest, OwnerScope,
    RegisterRequest, TransferRequest, UserStatusFilter, UserStatusUpdateRequest,
};
pub use response::{ApiError, ApiResponse, ApiResult, error_codes, ok};
pub use responses::{AuthResponse, CardResponse, TransactionResponse, UserResponse};
