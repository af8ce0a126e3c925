// HTTP handlers for transaction endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::feed::{Feed, FeedQuery};
use crate::transactions::{
    error::TransactionError,
    models::{CreateTransactionAdminRequest, CreateTransactionRequest, TransactionResponse},
};
use crate::AppState;

/// Record a transaction owned by the caller
/// POST /transaction/new-transaction
#[utoipa::path(
    post,
    path = "/transaction/new-transaction",
    request_body = CreateTransactionRequest,
    responses(
        (status = 200, description = "Transaction created", body = TransactionResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Owner not found", body = String, example = json!({"error": "Owner not found"}))
    ),
    tag = "transactions"
)]
pub async fn create_transaction_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<Json<TransactionResponse>, TransactionError> {
    request
        .validate()
        .map_err(|e| TransactionError::ValidationError(e.to_string()))?;

    let transaction = state
        .transaction_service
        .create_transaction(user.user_id, request)
        .await?;

    Ok(Json(transaction.into()))
}

/// Record a transaction for another user; requires ADMIN scope
/// POST /transaction/new-transaction-admin
#[utoipa::path(
    post,
    path = "/transaction/new-transaction-admin",
    request_body = CreateTransactionAdminRequest,
    responses(
        (status = 200, description = "Transaction created for the target user", body = TransactionResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller lacks ADMIN scope"),
        (status = 422, description = "Target user not found", body = String, example = json!({"error": "Owner not found"}))
    ),
    tag = "transactions"
)]
pub async fn create_transaction_admin_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateTransactionAdminRequest>,
) -> Result<Json<TransactionResponse>, TransactionError> {
    request
        .validate()
        .map_err(|e| TransactionError::ValidationError(e.to_string()))?;

    let transaction = state
        .transaction_service
        .create_transaction_as_admin(&user.scopes, request)
        .await?;

    Ok(Json(transaction.into()))
}

/// Delete a transaction; allowed for its owner or an admin
/// DELETE /transaction/delete/{id}
#[utoipa::path(
    delete,
    path = "/transaction/delete/{id}",
    params(
        ("id" = i64, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is neither owner nor admin"),
        (status = 404, description = "Transaction not found")
    ),
    tag = "transactions"
)]
pub async fn delete_transaction_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(transaction_id): Path<i64>,
) -> Result<StatusCode, TransactionError> {
    state
        .transaction_service
        .delete_transaction(transaction_id, user.user_id, &user.scopes)
        .await?;

    Ok(StatusCode::OK)
}

/// Paginated feed of all transactions, newest first
/// GET /transaction/feed
#[utoipa::path(
    get,
    path = "/transaction/feed",
    params(FeedQuery),
    responses(
        (status = 200, description = "One page of the feed", body = Feed),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "transactions"
)]
pub async fn transaction_feed_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Feed>, TransactionError> {
    let feed = state.transaction_service.feed(query).await?;
    Ok(Json(feed))
}
