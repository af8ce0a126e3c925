// Transaction data models and DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Transaction database model
#[derive(Debug, Clone, FromRow)]
pub struct Transaction {
    pub transaction_id: i64,
    pub user_id: Uuid,
    pub description: String,
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Transaction creation request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTransactionRequest {
    #[validate(length(min = 1))]
    pub description: String,
    pub value: Decimal,
}

/// Admin transaction creation request DTO; the transaction is owned by the
/// named target user, not the caller
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTransactionAdminRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub value: Decimal,
}

/// Transaction response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionResponse {
    pub transaction_id: i64,
    pub user_id: Uuid,
    pub description: String,
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            transaction_id: transaction.transaction_id,
            user_id: transaction.user_id,
            description: transaction.description,
            value: transaction.value,
            created_at: transaction.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn value_round_trips_through_json_as_decimal_string() {
        let response = TransactionResponse {
            transaction_id: 1,
            user_id: Uuid::new_v4(),
            description: "groceries".to_string(),
            value: dec!(42.00),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["value"], "42.00");

        let request: CreateTransactionRequest =
            serde_json::from_value(serde_json::json!({
                "description": "groceries",
                "value": "42.00"
            }))
            .unwrap();
        assert_eq!(request.value, dec!(42.00));
    }
}
