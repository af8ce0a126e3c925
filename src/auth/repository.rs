// Database repository for user records

use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{
    error::AuthError,
    models::{Role, User, UserWithRoles},
};

/// User repository for database operations.
///
/// The only component that reads or writes `users`, `roles`, and
/// `users_roles`; password hashes never cross this boundary outward except
/// inside the `User` model handed to the auth service.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with the given role.
    ///
    /// The user row and its role link are inserted in one transaction. A
    /// unique violation on the username maps to `UserAlreadyExists`.
    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING user_id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AuthError::UserAlreadyExists;
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        sqlx::query("INSERT INTO users_roles (user_id, role_id) VALUES ($1, $2)")
            .bind(user.user_id)
            .bind(role.id())
            .execute(&mut *tx)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        tx.commit().await?;

        Ok(user)
    }

    /// Find a user by username (exact match)
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, username, password_hash, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, username, password_hash, created_at FROM users WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Role names assigned to a user, in seeded-id order
    pub async fn roles_of(&self, user_id: Uuid) -> Result<Vec<String>, AuthError> {
        let roles: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT r.name
            FROM roles r
            JOIN users_roles ur ON ur.role_id = r.role_id
            WHERE ur.user_id = $1
            ORDER BY r.role_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(roles)
    }

    /// List all users with their role names
    pub async fn list_all(&self) -> Result<Vec<UserWithRoles>, AuthError> {
        let users = sqlx::query_as::<_, UserWithRoles>(
            r#"
            SELECT u.user_id,
                   u.username,
                   u.created_at,
                   COALESCE(
                       ARRAY_AGG(r.name ORDER BY r.role_id) FILTER (WHERE r.name IS NOT NULL),
                       ARRAY[]::TEXT[]
                   ) AS roles
            FROM users u
            LEFT JOIN users_roles ur ON ur.user_id = u.user_id
            LEFT JOIN roles r ON r.role_id = ur.role_id
            GROUP BY u.user_id, u.username, u.created_at
            ORDER BY u.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    // Repository methods are exercised against a live PostgreSQL instance by
    // the end-to-end suite in src/tests.rs.
}
