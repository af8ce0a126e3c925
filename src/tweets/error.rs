// Tweet error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error types for tweet operations
#[derive(Debug, thiserror::Error)]
pub enum TweetError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Tweet not found")]
    NotFound,

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<sqlx::Error> for TweetError {
    fn from(err: sqlx::Error) -> Self {
        TweetError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for TweetError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            TweetError::DatabaseError(msg) => {
                tracing::error!("Database error in tweets: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            TweetError::NotFound => (StatusCode::NOT_FOUND, "Tweet not found".to_string()),
            TweetError::OwnerNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Owner not found".to_string(),
            ),
            TweetError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Not allowed to modify this tweet".to_string(),
            ),
            TweetError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_expected_status_codes() {
        assert_eq!(
            TweetError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TweetError::OwnerNotFound.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            TweetError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            TweetError::DatabaseError("boom".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
