//! User authentication: argon2 password storage, JWT issue/verify, middleware.

pub mod middleware;
pub mod service;

pub use middleware::jwt_auth_middleware;
pub use service::{Claims, UserAuthService, principal_from_claims};
