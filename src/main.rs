pub mod auth;
pub mod db;
pub mod feed;
pub mod transactions;
pub mod tweets;

use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{
    handlers::{list_users_handler, login_handler, register_handler},
    password::PasswordHasher,
    repository::UserRepository,
    service::AuthService,
    token::TokenService,
};
use transactions::{
    handlers::{
        create_transaction_admin_handler, create_transaction_handler, delete_transaction_handler,
        transaction_feed_handler,
    },
    repository::TransactionRepository,
    service::TransactionService,
};
use tweets::{
    handlers::{create_tweet_handler, delete_tweet_handler, feed_handler},
    repository::TweetRepository,
    service::TweetService,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::login_handler,
        auth::handlers::register_handler,
        auth::handlers::list_users_handler,
        tweets::handlers::create_tweet_handler,
        tweets::handlers::delete_tweet_handler,
        tweets::handlers::feed_handler,
        transactions::handlers::create_transaction_handler,
        transactions::handlers::create_transaction_admin_handler,
        transactions::handlers::delete_transaction_handler,
        transactions::handlers::transaction_feed_handler,
    ),
    components(
        schemas(
            auth::models::LoginRequest,
            auth::models::LoginResponse,
            auth::models::CreateUserRequest,
            auth::models::UserResponse,
            tweets::models::CreateTweetRequest,
            tweets::models::TweetResponse,
            transactions::models::CreateTransactionRequest,
            transactions::models::CreateTransactionAdminRequest,
            transactions::models::TransactionResponse,
            feed::Feed,
            feed::FeedItem,
        )
    ),
    tags(
        (name = "auth", description = "Login and token issuance"),
        (name = "users", description = "Registration and admin user listing"),
        (name = "tweets", description = "Tweet feed and ownership-guarded mutations"),
        (name = "transactions", description = "Transaction feed and ownership-guarded mutations")
    ),
    info(
        title = "Tweet API",
        version = "1.0.0",
        description = "JWT-authenticated social/finance demo backend with ownership-or-admin authorization"
    )
)]
struct ApiDoc;

/// Application state shared across handlers.
///
/// All services are constructed once at startup and injected here; nothing
/// reads configuration or builds crypto primitives per request.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub tweet_service: TweetService,
    pub transaction_service: TransactionService,
}

// Lets the AuthenticatedUser extractor pull the token service out of state.
impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.token_service.clone()
    }
}

/// Wire repositories and services onto a pool and a token service
pub fn build_state(db: PgPool, token_service: TokenService) -> AppState {
    let token_service = Arc::new(token_service);
    let users = UserRepository::new(db.clone());
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        PasswordHasher::new(),
        token_service.clone(),
    ));
    let tweet_service = TweetService::new(TweetRepository::new(db.clone()), users.clone());
    let transaction_service =
        TransactionService::new(TransactionRepository::new(db.clone()), users);

    AppState {
        db,
        token_service,
        auth_service,
        tweet_service,
        transaction_service,
    }
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
pub fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Auth and users
        .route("/login", post(login_handler))
        .route("/users/new", post(register_handler))
        .route("/users/list-all", get(list_users_handler))
        // Tweets
        .route("/tweets/new", post(create_tweet_handler))
        .route("/tweets/delete/:id", delete(delete_tweet_handler))
        .route("/tweets/feed", get(feed_handler))
        // Transactions
        .route("/transaction/new-transaction", post(create_transaction_handler))
        .route(
            "/transaction/new-transaction-admin",
            post(create_transaction_admin_handler),
        )
        .route("/transaction/delete/:id", delete(delete_transaction_handler))
        .route("/transaction/feed", get(transaction_feed_handler))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Tweet API - Starting...");

    // Get configuration from environment variables
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let private_key_path = std::env::var("JWT_PRIVATE_KEY_PATH")
        .expect("JWT_PRIVATE_KEY_PATH must be set in environment");
    let public_key_path = std::env::var("JWT_PUBLIC_KEY_PATH")
        .expect("JWT_PUBLIC_KEY_PATH must be set in environment");
    let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());

    // Only this process ever sees the private key; replicas that just verify
    // tokens need the public key alone.
    let private_key_pem =
        std::fs::read(&private_key_path).expect("Failed to read JWT private key");
    let public_key_pem = std::fs::read(&public_key_path).expect("Failed to read JWT public key");
    let token_service = TokenService::from_rsa_pem(&private_key_pem, &public_key_pem)
        .expect("Failed to load JWT signing keys");

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let state = build_state(db_pool, token_service);

    // Seed the bootstrap admin account on first run
    state
        .auth_service
        .ensure_admin_user(&admin_password)
        .await
        .expect("Failed to ensure admin user");

    // Create the application router
    let app = create_router(state);

    // Start the Axum server
    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Tweet API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}

#[cfg(test)]
mod tests;
