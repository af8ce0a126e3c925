// Authentication module
// Provides JWT-based authentication with user registration, login, and
// ownership-or-admin authorization decisions

pub mod authorization;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{list_users_handler, login_handler, register_handler};
pub use middleware::AuthenticatedUser;
pub use models::{CreateUserRequest, LoginRequest, LoginResponse, Role, User, UserResponse};
pub use password::PasswordHasher;
pub use repository::UserRepository;
pub use service::AuthService;
pub use token::{Claims, TokenService};
