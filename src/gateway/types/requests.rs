//! Request DTOs for the HTTP API
//!
//! Shape validation (lengths, formats) lives here via `validator`;
//! business rules stay in the services.

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::cards::CardStatus;
use crate::users::UserStatus;

// ============================================================================
// Auth
// ============================================================================

/// Account registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Login name, 3-50 characters
    #[schema(example = "ivan")]
    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    pub username: String,
    /// Contact email, unique per account
    #[schema(example = "ivan@example.com")]
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    /// Plaintext password, hashed before storage
    #[schema(example = "correct-horse-battery")]
    #[validate(length(min = 8, max = 100, message = "password must be 8-100 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ivan")]
    pub username: String,
    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

// ============================================================================
// Cards
// ============================================================================

/// Card issue request; number, expiry and balance are server-assigned
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CardCreateRequest {
    /// Embossed holder name: uppercase latin letters and spaces
    #[schema(example = "IVAN PETROV")]
    #[validate(
        length(min = 2, max = 100, message = "card holder must be 2-100 characters"),
        custom(function = "validate_card_holder")
    )]
    pub card_holder: String,
}

fn validate_card_holder(value: &str) -> Result<(), ValidationError> {
    let well_formed = value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().all(|c| c.is_ascii_uppercase() || c == ' ');
    if well_formed {
        Ok(())
    } else {
        let mut err = ValidationError::new("card_holder_format");
        err.message = Some("card holder must be uppercase latin letters and spaces".into());
        Err(err)
    }
}

/// Card status change request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CardStatusUpdateRequest {
    /// Requested status ("ACTIVE" | "BLOCKED" | "EXPIRED")
    pub status: CardStatus,
}

// ============================================================================
// Users
// ============================================================================

/// User status change request (admin only)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserStatusUpdateRequest {
    /// Requested status ("ACTIVE" | "BLOCKED")
    pub status: UserStatus,
}

// ============================================================================
// Transfers
// ============================================================================

/// Transfer between two cards of the acting user
///
/// Amount sign and balance sufficiency are checked by the transfer
/// engine in its fixed order, not at the DTO layer.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TransferRequest {
    /// Source card id
    #[schema(example = 1)]
    pub from_card_id: i64,
    /// Destination card id
    #[schema(example = 2)]
    pub to_card_id: i64,
    /// Amount to move, in account currency
    #[schema(example = "100.50")]
    pub amount: Decimal,
    /// Optional note stored with the ledger row
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Optional status filter for card listings
#[derive(Debug, Deserialize, IntoParams)]
pub struct CardStatusFilter {
    /// Keep only cards in this status
    pub status: Option<CardStatus>,
}

/// Optional status filter for user listings
#[derive(Debug, Deserialize, IntoParams)]
pub struct UserStatusFilter {
    /// Keep only users in this status
    pub status: Option<UserStatus>,
}

/// Owner scope for the admin card delete
#[derive(Debug, Deserialize, IntoParams)]
pub struct OwnerScope {
    /// Id of the user the card must belong to
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn register_accepts_well_formed_input() {
        assert!(register("ivan", "ivan@example.com", "longenough").validate().is_ok());
    }

    #[test]
    fn register_rejects_short_username() {
        assert!(register("iv", "ivan@example.com", "longenough").validate().is_err());
    }

    #[test]
    fn register_rejects_bad_email() {
        assert!(register("ivan", "not-an-email", "longenough").validate().is_err());
    }

    #[test]
    fn register_rejects_short_password() {
        assert!(register("ivan", "ivan@example.com", "short").validate().is_err());
    }

    #[test]
    fn card_holder_must_be_uppercase_latin() {
        let ok = CardCreateRequest {
            card_holder: "IVAN PETROV".to_string(),
        };
        assert!(ok.validate().is_ok());

        for bad in ["ivan petrov", "IVAN-PETROV", "ИВАН ПЕТРОВ", "   "] {
            let req = CardCreateRequest {
                card_holder: bad.to_string(),
            };
            assert!(req.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn transfer_description_is_capped() {
        let req = TransferRequest {
            from_card_id: 1,
            to_card_id: 2,
            amount: Decimal::new(100, 0),
            description: Some("x".repeat(501)),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn transfer_without_description_is_fine() {
        let req = TransferRequest {
            from_card_id: 1,
            to_card_id: 2,
            amount: Decimal::new(100, 0),
            description: None,
        };
        assert!(req.validate().is_ok());
    }
}
