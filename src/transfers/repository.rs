//! Repository layer for the append-only transaction ledger.

use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};

use super::models::{Transaction, TransactionStatus};
use crate::pagination::PageQuery;

pub struct TransactionRepository;

impl TransactionRepository {
    pub async fn insert(
        ex: impl PgExecutor<'_>,
        from_card_id: i64,
        to_card_id: i64,
        amount: Decimal,
        status: TransactionStatus,
        description: Option<&str>,
    ) -> Result<Transaction, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            r#"INSERT INTO transactions (from_card_id, to_card_id, amount, status, description)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, from_card_id, to_card_id, amount, transaction_date, status, description"#,
        )
        .bind(from_card_id)
        .bind(to_card_id)
        .bind(amount)
        .bind(status.as_str())
        .bind(description)
        .fetch_one(ex)
        .await
    }

    /// Whether any ledger row touches the card, on either side.
    pub async fn exists_for_card(
        ex: impl PgExecutor<'_>,
        card_id: i64,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(
                   SELECT 1 FROM transactions
                   WHERE from_card_id = $1 OR to_card_id = $1
               )"#,
        )
        .bind(card_id)
        .fetch_one(ex)
        .await
    }

    /// One page over the whole ledger, newest first (admin view).
    pub async fn page_all(
        pool: &PgPool,
        query: &PageQuery,
    ) -> Result<(Vec<Transaction>, i64), sqlx::Error> {
        let total = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM transactions"#)
            .fetch_one(pool)
            .await?;
        let rows = sqlx::query_as::<_, Transaction>(
            r#"SELECT id, from_card_id, to_card_id, amount, transaction_date, status, description
               FROM transactions
               ORDER BY transaction_date DESC
               LIMIT $1 OFFSET $2"#,
        )
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(pool)
        .await?;
        Ok((rows, total))
    }

    /// One page of the movements touching any card the user owns.
    pub async fn page_by_user(
        pool: &PgPool,
        user_id: i64,
        query: &PageQuery,
    ) -> Result<(Vec<Transaction>, i64), sqlx::Error> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM transactions t
               WHERE EXISTS(SELECT 1 FROM cards c
                            WHERE c.id = t.from_card_id AND c.owner_id = $1)
                  OR EXISTS(SELECT 1 FROM cards c
                            WHERE c.id = t.to_card_id AND c.owner_id = $1)"#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        let rows = sqlx::query_as::<_, Transaction>(
            r#"SELECT t.id, t.from_card_id, t.to_card_id, t.amount,
                      t.transaction_date, t.status, t.description
               FROM transactions t
               WHERE EXISTS(SELECT 1 FROM cards c
                            WHERE c.id = t.from_card_id AND c.owner_id = $1)
                  OR EXISTS(SELECT 1 FROM cards c
                            WHERE c.id = t.to_card_id AND c.owner_id = $1)
               ORDER BY t.transaction_date DESC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(user_id)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(pool)
        .await?;
        Ok((rows, total))
    }

    /// One page of the movements where the card is sender or receiver.
    pub async fn page_by_card(
        pool: &PgPool,
        card_id: i64,
        query: &PageQuery,
    ) -> Result<(Vec<Transaction>, i64), sqlx::Error> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM transactions
               WHERE from_card_id = $1 OR to_card_id = $1"#,
        )
        .bind(card_id)
        .fetch_one(pool)
        .await?;
        let rows = sqlx::query_as::<_, Transaction>(
            r#"SELECT id, from_card_id, to_card_id, amount, transaction_date, status, description
               FROM transactions
               WHERE from_card_id = $1 OR to_card_id = $1
               ORDER BY transaction_date DESC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(card_id)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(pool)
        .await?;
        Ok((rows, total))
    }
}
