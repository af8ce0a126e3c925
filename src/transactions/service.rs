// Transaction service - business logic layer

use uuid::Uuid;

use crate::auth::{
    authorization,
    models::Role,
    repository::UserRepository,
};
use crate::feed::{Feed, FeedQuery};
use crate::transactions::{
    error::TransactionError,
    models::{CreateTransactionAdminRequest, CreateTransactionRequest, Transaction},
    repository::TransactionRepository,
};

/// Service for transaction create/delete/feed operations, including the
/// admin path that records a transaction on behalf of another user
#[derive(Clone)]
pub struct TransactionService {
    transactions: TransactionRepository,
    users: UserRepository,
}

impl TransactionService {
    /// Create a new TransactionService
    pub fn new(transactions: TransactionRepository, users: UserRepository) -> Self {
        Self {
            transactions,
            users,
        }
    }

    /// Create a transaction owned by `owner_id`
    pub async fn create_transaction(
        &self,
        owner_id: Uuid,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, TransactionError> {
        let owner = self
            .users
            .find_by_id(owner_id)
            .await
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        if owner.is_none() {
            return Err(TransactionError::OwnerNotFound);
        }

        let transaction = self
            .transactions
            .create(owner_id, &request.description, request.value)
            .await?;

        tracing::info!(
            "User {} created transaction {}",
            owner_id,
            transaction.transaction_id
        );
        Ok(transaction)
    }

    /// Create a transaction on behalf of another user.
    ///
    /// Requires the actor to carry the ADMIN role; fails with `OwnerNotFound`
    /// when the target username does not resolve. The created transaction is
    /// owned by the target, not the actor.
    pub async fn create_transaction_as_admin(
        &self,
        actor_roles: &[String],
        request: CreateTransactionAdminRequest,
    ) -> Result<Transaction, TransactionError> {
        if !authorization::has_role(actor_roles, Role::Admin) {
            return Err(TransactionError::Forbidden);
        }

        let target = self
            .users
            .find_by_username(&request.username)
            .await
            .map_err(|e| TransactionError::DatabaseError(e.to_string()))?
            .ok_or(TransactionError::OwnerNotFound)?;

        let transaction = self
            .transactions
            .create(target.user_id, &request.description, request.value)
            .await?;

        tracing::info!(
            "Admin recorded transaction {} for user {}",
            transaction.transaction_id,
            target.user_id
        );
        Ok(transaction)
    }

    /// Delete a transaction if the actor owns it or carries the ADMIN role
    pub async fn delete_transaction(
        &self,
        transaction_id: i64,
        actor_id: Uuid,
        actor_roles: &[String],
    ) -> Result<(), TransactionError> {
        let transaction = self
            .transactions
            .find_by_id(transaction_id)
            .await?
            .ok_or(TransactionError::NotFound)?;

        if !authorization::can_mutate(actor_id, actor_roles, transaction.user_id) {
            return Err(TransactionError::Forbidden);
        }

        if !self.transactions.delete_by_id(transaction_id).await? {
            return Err(TransactionError::NotFound);
        }

        tracing::info!("User {} deleted transaction {}", actor_id, transaction_id);
        Ok(())
    }

    /// One page of the transaction feed, newest first
    pub async fn feed(&self, query: FeedQuery) -> Result<Feed, TransactionError> {
        let page = query.page_index();
        let size = query.page_size();

        let total_elements = self.transactions.count().await?;
        let items = self
            .transactions
            .feed_page(i64::from(size), i64::from(page) * i64::from(size))
            .await?;

        Ok(Feed::new(items, page, size, total_elements))
    }
}

#[cfg(test)]
mod tests {
    // The admin-scope gate and ownership checks reuse the guard unit tested
    // in auth/authorization.rs; the end-to-end paths run in src/tests.rs.
}
