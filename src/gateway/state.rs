use std::sync::Arc;

use crate::db::Database;
use crate::user_auth::UserAuthService;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL database handle
    pub db: Database,
    /// Token issuing and verification
    pub user_auth: Arc<UserAuthService>,
}

impl AppState {
    pub fn new(db: Database, user_auth: Arc<UserAuthService>) -> Self {
        Self { db, user_auth }
    }
}
