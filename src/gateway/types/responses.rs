//! Response DTOs: what the API exposes of the stored rows
//!
//! - `UserResponse` omits the password hash
//! - `CardResponse` carries the masked number only, never the pan

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::cards::{Card, CardStatus};
use crate::transfers::{Transaction, TransactionStatus};
use crate::users::{Role, User, UserStatus};

/// Public view of a user account
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "ivan")]
    pub username: String,
    #[schema(example = "ivan@example.com")]
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
        }
    }
}

/// Public view of a card
#[derive(Debug, Serialize, ToSchema)]
pub struct CardResponse {
    #[schema(example = 1)]
    pub id: i64,
    /// Masked card number, last four digits visible
    #[schema(example = "**** **** **** 3456")]
    pub masked_number: String,
    #[schema(example = "IVAN PETROV")]
    pub card_holder: String,
    pub expiration_date: NaiveDate,
    pub status: CardStatus,
    /// Current balance, non-negative
    #[schema(example = "250.00")]
    pub balance: Decimal,
    #[schema(example = 1)]
    pub owner_id: i64,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            masked_number: card.masked_number,
            card_holder: card.card_holder,
            expiration_date: card.expiration_date,
            status: card.status,
            balance: card.balance,
            owner_id: card.owner_id,
        }
    }
}

/// One ledger row
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub from_card_id: i64,
    pub to_card_id: i64,
    #[schema(example = "100.50")]
    pub amount: Decimal,
    pub transaction_date: DateTime<Utc>,
    pub status: TransactionStatus,
    pub description: Option<String>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            from_card_id: tx.from_card_id,
            to_card_id: tx.to_card_id,
            amount: tx.amount,
            transaction_date: tx.transaction_date,
            status: tx.status,
            description: tx.description,
        }
    }
}

/// Issued on register and login
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// Bearer token for the Authorization header
    pub token: String,
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "ivan")]
    pub username: String,
    pub role: Role,
}
