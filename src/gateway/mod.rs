pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::Database;
use crate::user_auth::UserAuthService;
use crate::user_auth::middleware::jwt_auth_middleware;
use state::AppState;

/// Build the full application router.
///
/// Kept separate from [`run_server`] so tests can drive the router
/// without binding a port.
pub fn create_app(state: Arc<AppState>) -> Router {
    // ==========================================================================
    // Auth Routes (public)
    // ==========================================================================
    let auth_routes = Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login));

    // ==========================================================================
    // Protected Routes - JWT required
    // ==========================================================================
    let protected_routes = Router::new()
        // Cards
        .route("/cards", post(handlers::create_card))
        .route("/cards", get(handlers::list_all_cards))
        .route("/cards/{id}", get(handlers::get_card))
        .route("/cards/{id}", axum::routing::delete(handlers::delete_card))
        .route("/cards/{id}/status", patch(handlers::update_card_status))
        .route("/cards/user/{user_id}", get(handlers::list_user_cards))
        // Transfers
        .route("/transfers", post(handlers::create_transfer))
        .route("/transfers", get(handlers::list_transfers))
        .route(
            "/transfers/user/{user_id}",
            get(handlers::list_user_transfers),
        )
        .route(
            "/transfers/card/{card_id}",
            get(handlers::list_card_transfers),
        )
        // Users
        .route("/users", get(handlers::list_users))
        .route("/users/me", get(handlers::get_me))
        .route("/users/{id}", get(handlers::get_user))
        .route("/users/{id}", axum::routing::delete(handlers::delete_user))
        .route("/users/{id}/status", patch(handlers::update_user_status))
        // Apply auth middleware
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    // Build complete router
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // API Routes
        .nest(
            "/api/v1",
            Router::new()
                .nest("/auth", auth_routes)
                .merge(protected_routes),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP gateway server
pub async fn run_server(port: u16, db: Database, user_auth: Arc<UserAuthService>) {
    let state = Arc::new(AppState::new(db, user_auth));
    let app = create_app(state);

    // Bind address
    let addr = format!("0.0.0.0:{}", port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    // Start server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
