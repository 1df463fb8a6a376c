//! Repository layer for user rows.

use sqlx::{PgExecutor, PgPool};

use super::models::{Role, User, UserStatus};
use crate::pagination::PageQuery;

/// User repository for CRUD operations. Methods take any executor so they
/// run against the pool or inside an open transaction alike.
pub struct UserRepository;

impl UserRepository {
    pub async fn create(
        ex: impl PgExecutor<'_>,
        username: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (username, email, password_hash, role)
               VALUES ($1, $2, $3, $4)
               RETURNING id, username, email, password_hash, role, status, created_at"#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(ex)
        .await
    }

    pub async fn find_by_id(
        ex: impl PgExecutor<'_>,
        id: i64,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, username, email, password_hash, role, status, created_at
               FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(ex)
        .await
    }

    pub async fn find_by_username(
        ex: impl PgExecutor<'_>,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, username, email, password_hash, role, status, created_at
               FROM users WHERE username = $1"#,
        )
        .bind(username)
        .fetch_optional(ex)
        .await
    }

    /// Row-locked lookup for read-modify-write paths.
    pub async fn lock_by_id(
        ex: impl PgExecutor<'_>,
        id: i64,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, username, email, password_hash, role, status, created_at
               FROM users WHERE id = $1 FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(ex)
        .await
    }

    pub async fn exists_by_username(
        ex: impl PgExecutor<'_>,
        username: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)"#)
            .bind(username)
            .fetch_one(ex)
            .await
    }

    pub async fn exists_by_email(
        ex: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"#)
            .bind(email)
            .fetch_one(ex)
            .await
    }

    pub async fn update_status(
        ex: impl PgExecutor<'_>,
        id: i64,
        status: UserStatus,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"UPDATE users SET status = $2 WHERE id = $1
               RETURNING id, username, email, password_hash, role, status, created_at"#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(ex)
        .await
    }

    pub async fn delete(ex: impl PgExecutor<'_>, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(ex)
            .await?;
        Ok(result.rows_affected())
    }

    /// One page of users sorted by username, optionally filtered by status.
    pub async fn page(
        pool: &PgPool,
        status: Option<UserStatus>,
        query: &PageQuery,
    ) -> Result<(Vec<User>, i64), sqlx::Error> {
        let (total, rows) = match status {
            Some(status) => {
                let total = sqlx::query_scalar::<_, i64>(
                    r#"SELECT COUNT(*) FROM users WHERE status = $1"#,
                )
                .bind(status.as_str())
                .fetch_one(pool)
                .await?;
                let rows = sqlx::query_as::<_, User>(
                    r#"SELECT id, username, email, password_hash, role, status, created_at
                       FROM users WHERE status = $1
                       ORDER BY username LIMIT $2 OFFSET $3"#,
                )
                .bind(status.as_str())
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(pool)
                .await?;
                (total, rows)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM users"#)
                    .fetch_one(pool)
                    .await?;
                let rows = sqlx::query_as::<_, User>(
                    r#"SELECT id, username, email, password_hash, role, status, created_at
                       FROM users ORDER BY username LIMIT $1 OFFSET $2"#,
                )
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(pool)
                .await?;
                (total, rows)
            }
        };
        Ok((rows, total))
    }
}
