// Database repository for tweets

use sqlx::PgPool;
use uuid::Uuid;

use crate::feed::FeedItem;
use crate::tweets::{error::TweetError, models::Tweet};

/// Repository for tweet operations
#[derive(Clone)]
pub struct TweetRepository {
    pool: PgPool,
}

impl TweetRepository {
    /// Create a new TweetRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a tweet; id and creation timestamp are server-assigned
    pub async fn create(&self, user_id: Uuid, content: &str) -> Result<Tweet, TweetError> {
        let tweet = sqlx::query_as::<_, Tweet>(
            r#"
            INSERT INTO tweets (user_id, content)
            VALUES ($1, $2)
            RETURNING tweet_id, user_id, content, created_at
            "#,
        )
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(tweet)
    }

    /// Find a tweet by ID
    pub async fn find_by_id(&self, tweet_id: i64) -> Result<Option<Tweet>, TweetError> {
        let tweet = sqlx::query_as::<_, Tweet>(
            "SELECT tweet_id, user_id, content, created_at FROM tweets WHERE tweet_id = $1",
        )
        .bind(tweet_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tweet)
    }

    /// Delete a tweet by ID.
    ///
    /// Single atomic statement; under concurrent deletes of the same id only
    /// one caller observes `true`.
    pub async fn delete_by_id(&self, tweet_id: i64) -> Result<bool, TweetError> {
        let result = sqlx::query("DELETE FROM tweets WHERE tweet_id = $1")
            .bind(tweet_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// One page of the feed, newest first
    pub async fn feed_page(&self, limit: i64, offset: i64) -> Result<Vec<FeedItem>, TweetError> {
        let items = sqlx::query_as::<_, (i64, String, String)>(
            r#"
            SELECT t.tweet_id, t.content, u.username
            FROM tweets t
            JOIN users u ON u.user_id = t.user_id
            ORDER BY t.created_at DESC, t.tweet_id DESC
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

    /// Total number of tweets
    pub async fn count(&self) -> Result<i64, TweetError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tweets")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    // Exercised against a live PostgreSQL instance by the end-to-end suite
    // in src/tests.rs.
}
