//! Card domain behavior through the public API: numbers, masking,
//! expiry normalization and the access predicates. No database needed.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use cardvault::authz::{self, Principal};
use cardvault::card_number;
use cardvault::cards::{Card, CardStatus, normalize_status};
use cardvault::users::Role;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn card_with(expiration_date: NaiveDate, status: CardStatus) -> Card {
    Card {
        id: 1,
        encrypted_number: "enc".to_string(),
        masked_number: "**** **** **** 0001".to_string(),
        card_holder: "IVAN PETROV".to_string(),
        expiration_date,
        status,
        balance: Decimal::ZERO,
        owner_id: 10,
    }
}

// ============================================================
// Card numbers
// ============================================================

#[test]
fn generated_numbers_are_sixteen_digits() {
    for _ in 0..100 {
        let number = card_number::generate();
        assert_eq!(number.len(), card_number::CARD_NUMBER_LEN);
        assert!(card_number::is_valid(&number), "bad number {number}");
    }
}

#[test]
fn mask_shows_only_the_last_four_digits() {
    let masked = card_number::mask("4111111111113456");
    assert_eq!(masked, "**** **** **** 3456");
    assert!(!masked.contains("4111"), "mask must hide the prefix");
}

#[test]
fn at_rest_encoding_round_trips() {
    let number = card_number::generate();
    let stored = card_number::encode(&number);
    assert_ne!(stored, number, "stored form must differ from the pan");
    assert_eq!(card_number::decode(&stored).unwrap(), number);
}

#[test]
fn tampered_stored_numbers_are_rejected() {
    for garbage in ["not base64 at all!!!", "YWJj", ""] {
        assert!(
            card_number::decode(garbage).is_err(),
            "decode accepted {garbage:?}"
        );
    }
}

// ============================================================
// Expiry normalization
// ============================================================

#[test]
fn active_card_past_its_date_becomes_expired() {
    let card = card_with(date(2024, 1, 1), CardStatus::Active);
    let normalized = normalize_status(card, date(2024, 6, 1));
    assert_eq!(normalized.status, CardStatus::Expired);
}

#[test]
fn blocked_card_past_its_date_also_becomes_expired() {
    // expiry wins over an administrative block
    let card = card_with(date(2024, 1, 1), CardStatus::Blocked);
    let normalized = normalize_status(card, date(2024, 6, 1));
    assert_eq!(normalized.status, CardStatus::Expired);
}

#[test]
fn card_keeps_its_status_until_the_day_after_expiry() {
    // the expiry day itself is still usable
    let card = card_with(date(2024, 6, 1), CardStatus::Active);
    let normalized = normalize_status(card, date(2024, 6, 1));
    assert_eq!(normalized.status, CardStatus::Active);

    let card = card_with(date(2024, 6, 1), CardStatus::Active);
    let normalized = normalize_status(card, date(2024, 6, 2));
    assert_eq!(normalized.status, CardStatus::Expired);
}

// ============================================================
// Access predicates
// ============================================================

fn user(user_id: i64) -> Principal {
    Principal {
        user_id,
        role: Role::User,
    }
}

fn admin(user_id: i64) -> Principal {
    Principal {
        user_id,
        role: Role::Admin,
    }
}

#[test]
fn admin_role_predicate() {
    assert!(authz::has_admin_role(Some(&admin(1))));
    assert!(!authz::has_admin_role(Some(&user(1))));
    assert!(!authz::has_admin_role(None));
}

#[test]
fn owner_predicate_matches_only_the_same_user() {
    assert!(authz::is_owner(Some(&user(7)), 7));
    assert!(!authz::is_owner(Some(&user(7)), 8));
    assert!(!authz::is_owner(None, 7));
}

#[test]
fn owner_or_admin_predicate() {
    // owner passes, admin passes for anyone, stranger fails
    assert!(authz::is_owner_or_admin(Some(&user(7)), 7));
    assert!(authz::is_owner_or_admin(Some(&admin(1)), 7));
    assert!(!authz::is_owner_or_admin(Some(&user(8)), 7));
    assert!(!authz::is_owner_or_admin(None, 7));
}
