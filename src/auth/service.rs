// Authentication service - business logic layer

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::{
    error::AuthError,
    models::{LoginResponse, Role, UserResponse},
    password::PasswordHasher,
    repository::UserRepository,
    token::TokenService,
};

/// Username of the bootstrap administrator account
const ADMIN_USERNAME: &str = "admin";

/// Authentication service coordinating credential checks and token issuance
pub struct AuthService {
    users: UserRepository,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(users: UserRepository, hasher: PasswordHasher, tokens: Arc<TokenService>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Check credentials and issue a signed token.
    ///
    /// An unknown username and a password mismatch produce the same
    /// `InvalidCredentials` error; the caller learns nothing about which
    /// check failed.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let user = match self.users.find_by_username(username).await? {
            Some(user) if self.hasher.verify(password, &user.password_hash) => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let roles = self.users.roles_of(user.user_id).await?;
        let issued = self.tokens.issue(user.user_id, &roles)?;

        info!("Issued token for user {}", user.user_id);
        Ok(LoginResponse {
            token: issued.token,
            expires_in: issued.expires_in,
        })
    }

    /// Register a new BASIC user
    pub async fn register(&self, username: &str, password: &str) -> Result<Uuid, AuthError> {
        let password_hash = self.hasher.hash(password)?;
        let user = self
            .users
            .create_user(username, &password_hash, Role::Basic)
            .await?;

        info!("Registered user {}", user.user_id);
        Ok(user.user_id)
    }

    /// List all users with their roles. Scope enforcement happens at the
    /// handler boundary; this method only reads.
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AuthError> {
        let users = self.users.list_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Ensure the bootstrap admin account exists, creating it on first run
    pub async fn ensure_admin_user(&self, admin_password: &str) -> Result<(), AuthError> {
        match self.users.find_by_username(ADMIN_USERNAME).await? {
            Some(_) => {
                info!("Admin user already exists");
            }
            None => {
                let password_hash = self.hasher.hash(admin_password)?;
                let user = self
                    .users
                    .create_user(ADMIN_USERNAME, &password_hash, Role::Admin)
                    .await?;
                info!("Created admin user {}", user.user_id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Login, registration, and the admin bootstrap path run against a live
    // PostgreSQL instance in src/tests.rs.
}
