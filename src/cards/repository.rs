//! Repository layer for card rows.

use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};

use super::models::{Card, CardStatus};
use crate::pagination::PageQuery;

pub struct CardRepository;

impl CardRepository {
    /// Insert a freshly issued card: status ACTIVE and balance 0 come from
    /// the column defaults.
    pub async fn insert(
        ex: impl PgExecutor<'_>,
        owner_id: i64,
        encrypted_number: &str,
        masked_number: &str,
        card_holder: &str,
        expiration_date: chrono::NaiveDate,
    ) -> Result<Card, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"INSERT INTO cards (owner_id, encrypted_number, masked_number, card_holder, expiration_date)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, encrypted_number, masked_number, card_holder,
                         expiration_date, status, balance, owner_id"#,
        )
        .bind(owner_id)
        .bind(encrypted_number)
        .bind(masked_number)
        .bind(card_holder)
        .bind(expiration_date)
        .fetch_one(ex)
        .await
    }

    pub async fn find_by_id(
        ex: impl PgExecutor<'_>,
        id: i64,
    ) -> Result<Option<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"SELECT id, encrypted_number, masked_number, card_holder,
                      expiration_date, status, balance, owner_id
               FROM cards WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(ex)
        .await
    }

    /// Row-locked lookup for read-modify-write paths.
    pub async fn lock_by_id(
        ex: impl PgExecutor<'_>,
        id: i64,
    ) -> Result<Option<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"SELECT id, encrypted_number, masked_number, card_holder,
                      expiration_date, status, balance, owner_id
               FROM cards WHERE id = $1 FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(ex)
        .await
    }

    pub async fn lock_by_id_and_owner(
        ex: impl PgExecutor<'_>,
        id: i64,
        owner_id: i64,
    ) -> Result<Option<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"SELECT id, encrypted_number, masked_number, card_holder,
                      expiration_date, status, balance, owner_id
               FROM cards WHERE id = $1 AND owner_id = $2 FOR UPDATE"#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(ex)
        .await
    }

    /// Collision probe for the number generator: the base64 form is
    /// deterministic, so equality on the stored column suffices.
    pub async fn find_by_encrypted_number(
        ex: impl PgExecutor<'_>,
        encrypted_number: &str,
    ) -> Result<Option<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"SELECT id, encrypted_number, masked_number, card_holder,
                      expiration_date, status, balance, owner_id
               FROM cards WHERE encrypted_number = $1"#,
        )
        .bind(encrypted_number)
        .fetch_optional(ex)
        .await
    }

    pub async fn exists_by_owner(
        ex: impl PgExecutor<'_>,
        owner_id: i64,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM cards WHERE owner_id = $1)"#)
            .bind(owner_id)
            .fetch_one(ex)
            .await
    }

    pub async fn update_status(
        ex: impl PgExecutor<'_>,
        id: i64,
        status: CardStatus,
    ) -> Result<Option<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"UPDATE cards SET status = $2 WHERE id = $1
               RETURNING id, encrypted_number, masked_number, card_holder,
                         expiration_date, status, balance, owner_id"#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(ex)
        .await
    }

    /// Exact-value balance write; status is persisted in the same statement
    /// so normalization and the balance land atomically.
    pub async fn update_balance_and_status(
        ex: impl PgExecutor<'_>,
        id: i64,
        balance: Decimal,
        status: CardStatus,
    ) -> Result<Card, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"UPDATE cards SET balance = $2, status = $3 WHERE id = $1
               RETURNING id, encrypted_number, masked_number, card_holder,
                         expiration_date, status, balance, owner_id"#,
        )
        .bind(id)
        .bind(balance)
        .bind(status.as_str())
        .fetch_one(ex)
        .await
    }

    pub async fn delete(ex: impl PgExecutor<'_>, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM cards WHERE id = $1"#)
            .bind(id)
            .execute(ex)
            .await?;
        Ok(result.rows_affected())
    }

    /// One page of a user's cards, oldest first, optionally filtered by the
    /// stored status.
    pub async fn page_by_owner(
        pool: &PgPool,
        owner_id: i64,
        status: Option<CardStatus>,
        query: &PageQuery,
    ) -> Result<(Vec<Card>, i64), sqlx::Error> {
        let (total, rows) = match status {
            Some(status) => {
                let total = sqlx::query_scalar::<_, i64>(
                    r#"SELECT COUNT(*) FROM cards WHERE owner_id = $1 AND status = $2"#,
                )
                .bind(owner_id)
                .bind(status.as_str())
                .fetch_one(pool)
                .await?;
                let rows = sqlx::query_as::<_, Card>(
                    r#"SELECT id, encrypted_number, masked_number, card_holder,
                              expiration_date, status, balance, owner_id
                       FROM cards WHERE owner_id = $1 AND status = $2
                       ORDER BY id LIMIT $3 OFFSET $4"#,
                )
                .bind(owner_id)
                .bind(status.as_str())
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(pool)
                .await?;
                (total, rows)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>(
                    r#"SELECT COUNT(*) FROM cards WHERE owner_id = $1"#,
                )
                .bind(owner_id)
                .fetch_one(pool)
                .await?;
                let rows = sqlx::query_as::<_, Card>(
                    r#"SELECT id, encrypted_number, masked_number, card_holder,
                              expiration_date, status, balance, owner_id
                       FROM cards WHERE owner_id = $1
                       ORDER BY id LIMIT $2 OFFSET $3"#,
                )
                .bind(owner_id)
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(pool)
                .await?;
                (total, rows)
            }
        };
        Ok((rows, total))
    }

    /// One page over the whole card store, newest first (admin view).
    pub async fn page_all(
        pool: &PgPool,
        status: Option<CardStatus>,
        query: &PageQuery,
    ) -> Result<(Vec<Card>, i64), sqlx::Error> {
        let (total, rows) = match status {
            Some(status) => {
                let total = sqlx::query_scalar::<_, i64>(
                    r#"SELECT COUNT(*) FROM cards WHERE status = $1"#,
                )
                .bind(status.as_str())
                .fetch_one(pool)
                .await?;
                let rows = sqlx::query_as::<_, Card>(
                    r#"SELECT id, encrypted_number, masked_number, card_holder,
                              expiration_date, status, balance, owner_id
                       FROM cards WHERE status = $1
                       ORDER BY id DESC LIMIT $2 OFFSET $3"#,
                )
                .bind(status.as_str())
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(pool)
                .await?;
                (total, rows)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM cards"#)
                    .fetch_one(pool)
                    .await?;
                let rows = sqlx::query_as::<_, Card>(
                    r#"SELECT id, encrypted_number, masked_number, card_holder,
                              expiration_date, status, balance, owner_id
                       FROM cards
                       ORDER BY id DESC LIMIT $1 OFFSET $2"#,
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
