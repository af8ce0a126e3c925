// Tweet data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Tweet database model
#[derive(Debug, Clone, FromRow)]
pub struct Tweet {
    pub tweet_id: i64,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Tweet creation request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTweetRequest {
    #[validate(length(min = 1))]
    pub content: String,
}

/// Tweet response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct TweetResponse {
    pub tweet_id: i64,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Tweet> for TweetResponse {
    fn from(tweet: Tweet) -> Self {
        Self {
            tweet_id: tweet.tweet_id,
            user_id: tweet.user_id,
            content: tweet.content,
            created_at: tweet.created_at,
        }
    }
}
