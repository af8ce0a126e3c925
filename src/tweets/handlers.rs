// HTTP handlers for tweet endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::feed::{Feed, FeedQuery};
use crate::tweets::{
    error::TweetError,
    models::{CreateTweetRequest, TweetResponse},
};
use crate::AppState;

/// Create a tweet owned by the caller
/// POST /tweets/new
#[utoipa::path(
    post,
    path = "/tweets/new",
    request_body = CreateTweetRequest,
    responses(
        (status = 200, description = "Tweet created", body = TweetResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Owner not found", body = String, example = json!({"error": "Owner not found"}))
    ),
    tag = "tweets"
)]
pub async fn create_tweet_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateTweetRequest>,
) -> Result<Json<TweetResponse>, TweetError> {
    request
        .validate()
        .map_err(|e| TweetError::ValidationError(e.to_string()))?;

    let tweet = state.tweet_service.create_tweet(user.user_id, request).await?;
    Ok(Json(tweet.into()))
}

/// Delete a tweet; allowed for its owner or an admin
/// DELETE /tweets/delete/{id}
#[utoipa::path(
    delete,
    path = "/tweets/delete/{id}",
    params(
        ("id" = i64, Path, description = "Tweet ID")
    ),
    responses(
        (status = 200, description = "Tweet deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is neither owner nor admin"),
        (status = 404, description = "Tweet not found")
    ),
    tag = "tweets"
)]
pub async fn delete_tweet_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(tweet_id): Path<i64>,
) -> Result<StatusCode, TweetError> {
    state
        .tweet_service
        .delete_tweet(tweet_id, user.user_id, &user.scopes)
        .await?;

    Ok(StatusCode::OK)
}

/// Paginated feed of all tweets, newest first
/// GET /tweets/feed
#[utoipa::path(
    get,
    path = "/tweets/feed",
    params(FeedQuery),
    responses(
        (status = 200, description = "One page of the feed", body = Feed),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "tweets"
)]
pub async fn feed_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Feed>, TweetError> {
    let feed = state.tweet_service.feed(query).await?;
    Ok(Json(feed))
}
