// Transaction module
// Create (self or admin-on-behalf), delete (owner-or-admin), and paginated feed

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::TransactionError;
pub use handlers::{
    create_transaction_admin_handler, create_transaction_handler, delete_transaction_handler,
    transaction_feed_handler,
};
pub use models::{
    CreateTransactionAdminRequest, CreateTransactionRequest, Transaction, TransactionResponse,
};
pub use repository::TransactionRepository;
pub use service::TransactionService;
