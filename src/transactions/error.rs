// Transaction error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error types for transaction operations
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Transaction not found")]
    NotFound,

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<sqlx::Error> for TransactionError {
    fn from(err: sqlx::Error) -> Self {
        TransactionError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for TransactionError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            TransactionError::DatabaseError(msg) => {
                tracing::error!("Database error in transactions: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            TransactionError::NotFound => {
                (StatusCode::NOT_FOUND, "Transaction not found".to_string())
            }
            TransactionError::OwnerNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Owner not found".to_string(),
            ),
            TransactionError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Not allowed to perform this operation".to_string(),
            ),
            TransactionError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
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
            TransactionError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TransactionError::OwnerNotFound.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            TransactionError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
