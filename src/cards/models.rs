//! Card records, status vocabulary and expiration normalization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Cards expire this many years after issue.
pub const CARD_EXPIRY_YEARS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    Blocked,
    Expired,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Active => "ACTIVE",
            CardStatus::Blocked => "BLOCKED",
            CardStatus::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(CardStatus::Active),
            "BLOCKED" => Ok(CardStatus::Blocked),
            "EXPIRED" => Ok(CardStatus::Expired),
            other => Err(format!("unknown card status: {other}")),
        }
    }
}

impl TryFrom<String> for CardStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A stored card row. `encrypted_number` is the base64 form of the 16-digit
/// number; `masked_number` is the only shape that ever leaves the service.
#[derive(Debug, Clone, FromRow)]
pub struct Card {
    pub id: i64,
    pub encrypted_number: String,
    pub masked_number: String,
    pub card_holder: String,
    pub expiration_date: NaiveDate,
    #[sqlx(try_from = "String")]
    pub status: CardStatus,
    pub balance: Decimal,
    pub owner_id: i64,
}

/// Force EXPIRED whenever the expiration date lies strictly before `today`.
///
/// EXPIRED is derived state: this runs on every service-path load and as the
/// final guard before every persisted write. A stale stored status can never
/// resurrect a date-passed card, and neither can an administrative override.
pub fn normalize_status(mut card: Card, today: NaiveDate) -> Card {
    if card.expiration_date < today {
        card.status = CardStatus::Expired;
    }
    card
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(expiration: NaiveDate, status: CardStatus) -> Card {
        Card {
            id: 1,
            encrypted_number: "MTIzNDU2Nzg5MDEyMzQ1Ng==".to_string(),
            masked_number: "**** **** **** 3456".to_string(),
            card_holder: "IVAN PETROV".to_string(),
            expiration_date: expiration,
            status,
            balance: Decimal::ZERO,
            owner_id: 1,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_expiration_forces_expired() {
        let today = date(2026, 6, 1);
        for status in [CardStatus::Active, CardStatus::Blocked, CardStatus::Expired] {
            let c = normalize_status(card(date(2026, 5, 31), status), today);
            assert_eq!(c.status, CardStatus::Expired);
        }
    }

    #[test]
    fn expiring_today_is_still_usable() {
        let today = date(2026, 6, 1);
        let c = normalize_status(card(today, CardStatus::Active), today);
        assert_eq!(c.status, CardStatus::Active);
    }

    #[test]
    fn future_expiration_keeps_stored_status() {
        let today = date(2026, 6, 1);
        let c = normalize_status(card(date(2029, 6, 1), CardStatus::Blocked), today);
        assert_eq!(c.status, CardStatus::Blocked);
    }

    #[test]
    fn status_round_trips_through_wire_form() {
        assert_eq!("EXPIRED".parse::<CardStatus>().unwrap(), CardStatus::Expired);
        assert_eq!(CardStatus::Blocked.to_string(), "BLOCKED");
        assert!("expired".parse::<CardStatus>().is_err());
    }
}
