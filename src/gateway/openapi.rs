//! OpenAPI / Swagger UI Documentation
//!
//! Auto-generated OpenAPI 3.0 documentation for the CardVault API.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

// Import handler types for schema registration
use crate::cards::CardStatus;
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    AuthResponse, CardCreateRequest, CardResponse, CardStatusUpdateRequest, LoginRequest,
    RegisterRequest, TransactionResponse, TransferRequest, UserResponse,
    UserStatusUpdateRequest,
};
use crate::pagination::Page;
use crate::transfers::TransactionStatus;
use crate::users::{Role, UserStatus};

/// Bearer JWT security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT issued by /api/v1/auth/register or /api/v1/auth/login. \
                             Send as: Authorization: Bearer {token}",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CardVault API",
        version = "1.0.0",
        description = "REST backend for bank cards, users, and money transfers with role-based access.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        // Public endpoints
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::auth::register,
        crate::gateway::handlers::auth::login,
        // Cards
        crate::gateway::handlers::cards::create_card,
        crate::gateway::handlers::cards::get_card,
        crate::gateway::handlers::cards::list_user_cards,
        crate::gateway::handlers::cards::list_all_cards,
        crate::gateway::handlers::cards::update_card_status,
        crate::gateway::handlers::cards::delete_card,
        // Transfers
        crate::gateway::handlers::transfers::create_transfer,
        crate::gateway::handlers::transfers::list_transfers,
        crate::gateway::handlers::transfers::list_user_transfers,
        crate::gateway::handlers::transfers::list_card_transfers,
        // Users
        crate::gateway::handlers::users::list_users,
        crate::gateway::handlers::users::get_me,
        crate::gateway::handlers::users::get_user,
        crate::gateway::handlers::users::update_user_status,
        crate::gateway::handlers::users::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            CardCreateRequest,
            CardStatusUpdateRequest,
            CardResponse,
            TransferRequest,
            TransactionResponse,
            UserStatusUpdateRequest,
            UserResponse,
            Page<CardResponse>,
            Page<TransactionResponse>,
            Page<UserResponse>,
            Role,
            UserStatus,
            CardStatus,
            TransactionStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login (no auth required)"),
        (name = "Cards", description = "Card issue, lookup and lifecycle (auth required)"),
        (name = "Transfers", description = "Money movement and ledger queries (auth required)"),
        (name = "Users", description = "Profile and user administration (auth required)"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
