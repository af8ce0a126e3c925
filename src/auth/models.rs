// Authentication data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Seeded role set. Rows are inserted by migration and never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Basic,
}

impl Role {
    /// Stable numeric identifier matching the seeded `roles` rows
    pub fn id(self) -> i64 {
        match self {
            Role::Admin => 1,
            Role::Basic => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Basic => "BASIC",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User database model
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User row joined with its role names, used by the admin listing
#[derive(Debug, Clone, FromRow)]
pub struct UserWithRoles {
    pub user_id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub roles: Vec<String>,
}

/// User response model (excludes password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub username: String,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserWithRoles> for UserResponse {
    fn from(user: UserWithRoles) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            roles: user.roles,
            created_at: user.created_at,
        }
    }
}

/// Registration request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    pub password: String,
}

/// Login response DTO carrying the signed token and its lifetime in seconds
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ids_match_seeded_rows() {
        assert_eq!(Role::Admin.id(), 1);
        assert_eq!(Role::Basic.id(), 2);
    }

    #[test]
    fn role_names_are_uppercase_constants() {
        assert_eq!(Role::Admin.as_str(), "ADMIN");
        assert_eq!(Role::Basic.as_str(), "BASIC");
        assert_eq!(Role::Basic.to_string(), "BASIC");
    }

    #[test]
    fn user_response_excludes_password_hash() {
        let user = UserWithRoles {
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            created_at: Utc::now(),
            roles: vec!["BASIC".to_string()],
        };
        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["username"], "alice");
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["roles"][0], "BASIC");
    }
}
