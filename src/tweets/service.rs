// Tweet service - business logic layer

use uuid::Uuid;

use crate::auth::{authorization, repository::UserRepository};
use crate::feed::{Feed, FeedQuery};
use crate::tweets::{
    error::TweetError,
    models::{CreateTweetRequest, Tweet},
    repository::TweetRepository,
};

/// Service for tweet create/delete/feed operations.
///
/// Every mutation consults the authorization guard with the actor's claims;
/// decisions are never cached between calls.
#[derive(Clone)]
pub struct TweetService {
    tweets: TweetRepository,
    users: UserRepository,
}

impl TweetService {
    /// Create a new TweetService
    pub fn new(tweets: TweetRepository, users: UserRepository) -> Self {
        Self { tweets, users }
    }

    /// Create a tweet owned by `owner_id`.
    ///
    /// Fails with `OwnerNotFound` if the owner does not resolve; the owner
    /// reference is immutable afterwards.
    pub async fn create_tweet(
        &self,
        owner_id: Uuid,
        request: CreateTweetRequest,
    ) -> Result<Tweet, TweetError> {
        let owner = self
            .users
            .find_by_id(owner_id)
            .await
            .map_err(|e| TweetError::DatabaseError(e.to_string()))?;

        if owner.is_none() {
            return Err(TweetError::OwnerNotFound);
        }

        let tweet = self.tweets.create(owner_id, &request.content).await?;
        tracing::info!("User {} created tweet {}", owner_id, tweet.tweet_id);
        Ok(tweet)
    }

    /// Delete a tweet if the actor owns it or carries the ADMIN role.
    ///
    /// The final delete is a single atomic statement: when two actors race on
    /// the same id, the loser observes `NotFound`.
    pub async fn delete_tweet(
        &self,
        tweet_id: i64,
        actor_id: Uuid,
        actor_roles: &[String],
    ) -> Result<(), TweetError> {
        let tweet = self
            .tweets
            .find_by_id(tweet_id)
            .await?
            .ok_or(TweetError::NotFound)?;

        if !authorization::can_mutate(actor_id, actor_roles, tweet.user_id) {
            return Err(TweetError::Forbidden);
        }

        if !self.tweets.delete_by_id(tweet_id).await? {
            return Err(TweetError::NotFound);
        }

        tracing::info!("User {} deleted tweet {}", actor_id, tweet_id);
        Ok(())
    }

    /// One page of the feed, newest first. A page index past the end yields
    /// empty content with the totals intact, not an error.
    pub async fn feed(&self, query: FeedQuery) -> Result<Feed, TweetError> {
        let page = query.page_index();
        let size = query.page_size();

        let total_elements = self.tweets.count().await?;
        let items = self
            .tweets
            .feed_page(i64::from(size), i64::from(page) * i64::from(size))
            .await?;

        Ok(Feed::new(items, page, size, total_elements))
    }
}

#[cfg(test)]
mod tests {
    // Create/delete/feed paths run against a live PostgreSQL instance in
    // src/tests.rs; the pure authorization decisions they rely on are unit
    // tested in auth/authorization.rs.
}
