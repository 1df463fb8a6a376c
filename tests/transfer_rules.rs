//! Black-box checks of the transfer admission rules through the public API.
//!
//! These drive `validate_transfer` the way the engine does: rows are run
//! through `normalize_status` first, then validated. No database needed.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use cardvault::cards::{Card, CardStatus, normalize_status};
use cardvault::error::CoreError;
use cardvault::transfers::validate_transfer;

const OWNER: i64 = 10;
const STRANGER: i64 = 99;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Helper to build an active card owned by `owner_id` holding `balance` units
fn card(id: i64, owner_id: i64, balance: i64) -> Card {
    Card {
        id,
        encrypted_number: format!("enc-{id}"),
        masked_number: "**** **** **** 0001".to_string(),
        card_holder: "IVAN PETROV".to_string(),
        expiration_date: date(2030, 1, 1),
        status: CardStatus::Active,
        balance: Decimal::new(balance, 0),
        owner_id,
    }
}

#[test]
fn transfer_between_own_active_cards_is_admitted() {
    let from = card(1, OWNER, 500);
    let to = card(2, OWNER, 0);

    let res = validate_transfer(&from, &to, OWNER, Decimal::new(10050, 2));
    assert!(res.is_ok(), "own active funded cards should pass: {res:?}");
}

#[test]
fn foreign_source_card_is_rejected() {
    let from = card(1, STRANGER, 500);
    let to = card(2, OWNER, 0);

    let err = validate_transfer(&from, &to, OWNER, Decimal::ONE).unwrap_err();
    assert!(matches!(err, CoreError::UnauthorizedTransfer));
}

#[test]
fn foreign_destination_card_is_rejected() {
    let from = card(1, OWNER, 500);
    let to = card(2, STRANGER, 0);

    let err = validate_transfer(&from, &to, OWNER, Decimal::ONE).unwrap_err();
    assert!(matches!(err, CoreError::UnauthorizedTransfer));
}

#[test]
fn card_cannot_transfer_to_itself() {
    let from = card(1, OWNER, 500);
    let to = card(1, OWNER, 500);

    let err = validate_transfer(&from, &to, OWNER, Decimal::ONE).unwrap_err();
    assert!(matches!(err, CoreError::UnauthorizedTransfer));
}

#[test]
fn overdraft_is_rejected_with_the_source_card_id() {
    let from = card(1, OWNER, 100);
    let to = card(2, OWNER, 0);

    let err = validate_transfer(&from, &to, OWNER, Decimal::new(10001, 2)).unwrap_err();
    assert!(matches!(err, CoreError::InsufficientFunds(1)));
}

#[test]
fn exact_balance_drains_the_card() {
    let from = card(1, OWNER, 100);
    let to = card(2, OWNER, 0);

    let res = validate_transfer(&from, &to, OWNER, Decimal::new(100, 0));
    assert!(res.is_ok(), "amount == balance should be allowed: {res:?}");
}

#[test]
fn zero_and_negative_amounts_are_rejected() {
    let from = card(1, OWNER, 100);
    let to = card(2, OWNER, 0);

    for amount in [Decimal::ZERO, Decimal::new(-5, 0)] {
        let err = validate_transfer(&from, &to, OWNER, amount).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidAmount(_)),
            "amount {amount} should be invalid, got {err:?}"
        );
    }
}

#[test]
fn expired_card_is_rejected_before_blocked_card() {
    // from expired, to blocked: the expiry failure must win
    let mut from = card(1, OWNER, 500);
    from.status = CardStatus::Expired;
    let mut to = card(2, OWNER, 0);
    to.status = CardStatus::Blocked;

    let err = validate_transfer(&from, &to, OWNER, Decimal::ONE).unwrap_err();
    assert!(matches!(err, CoreError::CardExpired(1)));
}

#[test]
fn source_card_state_is_checked_before_destination() {
    // both blocked: the failure names the source card
    let mut from = card(1, OWNER, 500);
    from.status = CardStatus::Blocked;
    let mut to = card(2, OWNER, 0);
    to.status = CardStatus::Blocked;

    let err = validate_transfer(&from, &to, OWNER, Decimal::ONE).unwrap_err();
    assert!(matches!(err, CoreError::CardBlocked(1)));
}

#[test]
fn blocked_destination_alone_still_fails() {
    let from = card(1, OWNER, 500);
    let mut to = card(2, OWNER, 0);
    to.status = CardStatus::Blocked;

    let err = validate_transfer(&from, &to, OWNER, Decimal::ONE).unwrap_err();
    assert!(matches!(err, CoreError::CardBlocked(2)));
}

#[test]
fn ownership_outranks_every_later_check() {
    // foreign card, blocked, overdrafted, negative amount all at once:
    // the ownership failure must be the one reported
    let mut from = card(1, STRANGER, 0);
    from.status = CardStatus::Blocked;
    let mut to = card(2, OWNER, 0);
    to.status = CardStatus::Blocked;

    let err = validate_transfer(&from, &to, OWNER, Decimal::new(-100, 0)).unwrap_err();
    assert!(matches!(err, CoreError::UnauthorizedTransfer));
}

#[test]
fn overdraft_outranks_card_state() {
    // blocked card without funds: the balance failure is reported first
    let mut from = card(1, OWNER, 0);
    from.status = CardStatus::Blocked;
    let to = card(2, OWNER, 0);

    let err = validate_transfer(&from, &to, OWNER, Decimal::new(50, 0)).unwrap_err();
    assert!(matches!(err, CoreError::InsufficientFunds(1)));
}

#[test]
fn date_passed_card_fails_as_expired_after_normalization() {
    // The store still says ACTIVE; normalization must flip it before the
    // checks run, exactly as the engine does.
    let mut from = card(1, OWNER, 500);
    from.expiration_date = date(2024, 1, 1);
    let to = card(2, OWNER, 0);

    let today = date(2024, 6, 1);
    let from = normalize_status(from, today);
    let to = normalize_status(to, today);

    let err = validate_transfer(&from, &to, OWNER, Decimal::ONE).unwrap_err();
    assert!(matches!(err, CoreError::CardExpired(1)));
}

#[test]
fn card_expiring_today_is_still_usable() {
    let mut from = card(1, OWNER, 500);
    from.expiration_date = date(2024, 6, 1);
    let to = card(2, OWNER, 0);

    let today = date(2024, 6, 1);
    let from = normalize_status(from, today);
    let to = normalize_status(to, today);

    let res = validate_transfer(&from, &to, OWNER, Decimal::ONE);
    assert!(res.is_ok(), "expiry day itself is not yet expired: {res:?}");
}
