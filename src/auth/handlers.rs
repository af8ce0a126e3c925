// HTTP handlers for authentication and user endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse},
};
use crate::AppState;

/// Login with username and password, receiving a signed token
/// POST /login
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "User or password is invalid", body = String, example = json!({"error": "User or password is invalid"}))
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let response = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(response))
}

/// Register a new BASIC user
/// POST /users/new
#[utoipa::path(
    post,
    path = "/users/new",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created"),
        (status = 422, description = "User already exists", body = String, example = json!({"error": "User already exists"}))
    ),
    tag = "users"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<StatusCode, AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    state
        .auth_service
        .register(&request.username, &request.password)
        .await?;

    Ok(StatusCode::OK)
}

/// List all users; requires ADMIN scope
/// GET /users/list-all
#[utoipa::path(
    get,
    path = "/users/list-all",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller lacks ADMIN scope")
    ),
    tag = "users"
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<UserResponse>>, AuthError> {
    user.require_admin()?;

    let users = state.auth_service.list_users().await?;
    Ok(Json(users))
}
