//! Shared error taxonomy for the card, user and transfer services.
//!
//! Services return [`CoreError`]; the gateway maps each variant onto an
//! HTTP status and a stable numeric error code (see `gateway::types`).

use rust_decimal::Decimal;
use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    // ======================== Not found ========================
    #[error("user not found with id: {0}")]
    UserNotFound(i64),

    #[error("user not found: {0}")]
    UsernameNotFound(String),

    #[error("card not found with id: {0}")]
    CardNotFound(i64),

    #[error("transaction not found with id: {0}")]
    TransactionNotFound(i64),

    // ======================== Conflicts ========================
    #[error("username already taken: {0}")]
    UsernameAlreadyExists(String),

    #[error("email already registered: {0}")]
    EmailAlreadyExists(String),

    // ====================== Invalid input ======================
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("invalid card number")]
    InvalidCardNumber,

    // ===================== State conflicts =====================
    #[error("insufficient funds on card {0}")]
    InsufficientFunds(i64),

    #[error("card {0} is blocked")]
    CardBlocked(i64),

    #[error("card {0} is expired")]
    CardExpired(i64),

    #[error("card {0} still holds a positive balance")]
    CardHasBalance(i64),

    #[error("card {0} has recorded transactions")]
    CardHasTransactions(i64),

    #[error("user {0} still owns cards")]
    UserHasCards(i64),

    // ======================= Authorization =====================
    #[error("transfers are allowed only between cards of one owner")]
    UnauthorizedTransfer,

    #[error("only an administrator may set this card status")]
    UnauthorizedStatusChange,

    #[error("access denied")]
    AccessDenied,

    #[error("invalid username or password")]
    InvalidCredentials,

    // ========================= Internal ========================
    #[error("card number encoding failed")]
    CardEncryption,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}
