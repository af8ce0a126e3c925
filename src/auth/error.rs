// Authentication and authorization error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// Error types for authentication and authorization operations
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("User or password is invalid")]
    InvalidCredentials,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Missing authentication token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Insufficient scope")]
    InsufficientScope,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Password hashing error")]
    PasswordHashError,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Invalid signing key: {0}")]
    KeyError(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AuthError::InvalidCredentials => {
                warn!("Login attempt with invalid credentials");
                (StatusCode::UNAUTHORIZED, "User or password is invalid".to_string())
            }
            AuthError::UserAlreadyExists => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "User already exists".to_string(),
            ),
            AuthError::MissingToken => {
                warn!("Missing token in request to protected endpoint");
                (StatusCode::UNAUTHORIZED, "Missing authentication token".to_string())
            }
            AuthError::InvalidToken => {
                warn!("Invalid or expired token presented");
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            AuthError::InsufficientScope => {
                warn!("Request denied for missing scope");
                (StatusCode::FORBIDDEN, "Insufficient scope".to_string())
            }
            AuthError::DatabaseError(msg) => {
                error!("Database error in auth: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AuthError::PasswordHashError => {
                error!("Password hashing error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AuthError::TokenError(msg) => {
                error!("Token error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AuthError::KeyError(msg) => {
                error!("Signing key error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_their_status_codes() {
        let cases = [
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::UserAlreadyExists, StatusCode::UNPROCESSABLE_ENTITY),
            (AuthError::MissingToken, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AuthError::InsufficientScope, StatusCode::FORBIDDEN),
            (
                AuthError::ValidationError("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn internal_errors_hide_details_from_clients() {
        let response = AuthError::DatabaseError("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
