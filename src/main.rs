//! CardVault - bank card and transfer backend
//!
//! Entry point: load config, set up logging, connect PostgreSQL,
//! bootstrap the schema, serve HTTP.
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Postgres │───▶│ Services │───▶│ Gateway  │
//! │  (YAML)  │    │ (schema) │    │ (domain) │    │  (axum)  │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```

use std::sync::Arc;

use cardvault::config::AppConfig;
use cardvault::db::Database;
use cardvault::gateway;
use cardvault::logging::init_logging;
use cardvault::user_auth::UserAuthService;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let mut app_config = AppConfig::load(&env);
    app_config.apply_env_overrides();
    let _log_guard = init_logging(&app_config);

    tracing::info!("Starting CardVault in {} mode", env);

    // Gateway config from YAML, allow --port override
    let port = get_port_override().unwrap_or(app_config.gateway.port);
    println!(
        "Gateway will listen on {}:{}",
        app_config.gateway.host, port
    );

    // Connect PostgreSQL and bootstrap the schema
    let db = match Database::connect(&app_config.postgres_url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ FATAL: PostgreSQL connection failed: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = db.init_schema().await {
        eprintln!("❌ FATAL: Failed to initialize schema: {}", e);
        std::process::exit(1);
    }
    println!("✅ PostgreSQL connected and schema initialized");

    let user_auth = Arc::new(UserAuthService::new(
        db.pool().clone(),
        app_config.auth.jwt_secret.clone(),
        app_config.auth.token_ttl_hours,
    ));

    gateway::run_server(port, db, user_auth).await;
}
