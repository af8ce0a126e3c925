// Tweet module
// Create, delete (owner-or-admin), and paginated feed

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::TweetError;
pub use handlers::{create_tweet_handler, delete_tweet_handler, feed_handler};
pub use models::{CreateTweetRequest, Tweet, TweetResponse};
pub use repository::TweetRepository;
pub use service::TweetService;
