// Database repository for transactions

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::feed::FeedItem;
use crate::transactions::{error::TransactionError, models::Transaction};

/// Repository for transaction operations
#[derive(Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    /// Create a new TransactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a transaction; id and creation timestamp are server-assigned
    pub async fn create(
        &self,
        user_id: Uuid,
        description: &str,
        value: Decimal,
    ) -> Result<Transaction, TransactionError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (user_id, description, value)
            VALUES ($1, $2, $3)
            RETURNING transaction_id, user_id, description, value, created_at
            "#,
        )
        .bind(user_id)
        .bind(description)
        .bind(value)
        .fetch_one(&self.pool)
        .await?;

        Ok(transaction)
    }

    /// Find a transaction by ID
    pub async fn find_by_id(
        &self,
        transaction_id: i64,
    ) -> Result<Option<Transaction>, TransactionError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT transaction_id, user_id, description, value, created_at
            FROM transactions
            WHERE transaction_id = $1
            "#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    /// Delete a transaction by ID; atomic, at most one concurrent caller
    /// observes `true`
    pub async fn delete_by_id(&self, transaction_id: i64) -> Result<bool, TransactionError> {
        let result = sqlx::query("DELETE FROM transactions WHERE transaction_id = $1")
            .bind(transaction_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// One page of the feed, newest first; descriptions stand in for content
    pub async fn feed_page(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FeedItem>, TransactionError> {
        let items = sqlx::query_as::<_, (i64, String, String)>(
            r#"
            SELECT t.transaction_id, t.description, u.username
            FROM transactions t
            JOIN users u ON u.user_id = t.user_id
            ORDER BY t.created_at DESC, t.transaction_id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(items
            .into_iter()
            .map(|(id, content, username)| FeedItem {
                id,
                content,
                username,
            })
            .collect())
    }

    /// Total number of transactions
    pub async fn count(&self) -> Result<i64, TransactionError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
