//! Role-based authorization predicates.
//!
//! The JWT middleware resolves a [`Principal`] and threads it explicitly into
//! every handler; nothing here reads ambient state. All predicates are total:
//! a missing principal or a missing card answers `false`, never an error.

use sqlx::PgPool;

use crate::error::CoreError;
use crate::users::Role;

/// The authenticated caller, as established by the gateway middleware.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: i64,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

pub fn has_admin_role(principal: Option<&Principal>) -> bool {
    principal.map(Principal::is_admin).unwrap_or(false)
}

pub fn is_owner(principal: Option<&Principal>, user_id: i64) -> bool {
    principal.map(|p| p.user_id == user_id).unwrap_or(false)
}

pub fn is_owner_or_admin(principal: Option<&Principal>, user_id: i64) -> bool {
    has_admin_role(principal) || is_owner(principal, user_id)
}

/// Whether the card exists and belongs to the given user. A card that does
/// not exist is simply not owned.
pub async fn is_card_owned_by_user(
    pool: &PgPool,
    card_id: i64,
    user_id: i64,
) -> Result<bool, CoreError> {
    let owner: Option<i64> = sqlx::query_scalar(r#"SELECT owner_id FROM cards WHERE id = $1"#)
        .bind(card_id)
        .fetch_optional(pool)
        .await?;
    Ok(owner == Some(user_id))
}

pub async fn is_card_owner_or_admin(
    pool: &PgPool,
    principal: Option<&Principal>,
    card_id: i64,
) -> Result<bool, CoreError> {
    if has_admin_role(principal) {
        return Ok(true);
    }
    match principal {
        Some(p) => is_card_owned_by_user(pool, card_id, p.user_id).await,
        None => Ok(false),
    }
}
