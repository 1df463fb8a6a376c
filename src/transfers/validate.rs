//! Pure admission checks for a transfer, in their contractual order.

use rust_decimal::Decimal;

use crate::cards::models::{Card, CardStatus};
use crate::error::CoreError;

/// Decide whether `acting_user_id` may move `amount` from `from` to `to`.
///
/// The checks run in a fixed order and the first failure wins:
/// ownership of both cards, distinct cards, sufficient balance, positive
/// amount, neither card expired, neither card blocked. Callers pass rows
/// that already went through `normalize_status`, so a date-passed card
/// fails here as EXPIRED regardless of what the store still says.
///
/// The engine resolves both rows under the acting user's scope before
/// calling in, which already guarantees ownership; the explicit check
/// here restates that contract for any caller that does not.
pub fn validate_transfer(
    from: &Card,
    to: &Card,
    acting_user_id: i64,
    amount: Decimal,
) -> Result<(), CoreError> {
    if from.owner_id != acting_user_id || to.owner_id != acting_user_id {
        return Err(CoreError::UnauthorizedTransfer);
    }
    if from.id == to.id {
        return Err(CoreError::UnauthorizedTransfer);
    }
    if from.balance < amount {
        return Err(CoreError::InsufficientFunds(from.id));
    }
    if amount <= Decimal::ZERO {
        return Err(CoreError::InvalidAmount(amount));
    }
    if from.status == CardStatus::Expired {
        return Err(CoreError::CardExpired(from.id));
    }
    if to.status == CardStatus::Expired {
        return Err(CoreError::CardExpired(to.id));
    }
    if from.status == CardStatus::Blocked {
        return Err(CoreError::CardBlocked(from.id));
    }
    if to.status == CardStatus::Blocked {
        return Err(CoreError::CardBlocked(to.id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const OWNER: i64 = 7;
    const STRANGER: i64 = 8;

    fn card(id: i64, owner_id: i64, balance: i64, status: CardStatus) -> Card {
        Card {
            id,
            encrypted_number: String::new(),
            masked_number: String::new(),
            card_holder: "IVAN PETROV".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            status,
            balance: Decimal::new(balance * 100, 2),
            owner_id,
        }
    }

    fn amount(value: i64) -> Decimal {
        Decimal::new(value * 100, 2)
    }

    #[test]
    fn transfer_between_own_active_cards_passes() {
        let from = card(1, OWNER, 100, CardStatus::Active);
        let to = card(2, OWNER, 0, CardStatus::Active);
        assert!(validate_transfer(&from, &to, OWNER, amount(40)).is_ok());
    }

    #[test]
    fn exact_balance_passes() {
        let from = card(1, OWNER, 40, CardStatus::Active);
        let to = card(2, OWNER, 0, CardStatus::Active);
        assert!(validate_transfer(&from, &to, OWNER, amount(40)).is_ok());
    }

    #[test]
    fn foreign_source_card_is_unauthorized() {
        let from = card(1, STRANGER, 100, CardStatus::Active);
        let to = card(2, OWNER, 0, CardStatus::Active);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(40)),
            Err(CoreError::UnauthorizedTransfer)
        ));
    }

    #[test]
    fn foreign_destination_card_is_unauthorized() {
        let from = card(1, OWNER, 100, CardStatus::Active);
        let to = card(2, STRANGER, 0, CardStatus::Active);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(40)),
            Err(CoreError::UnauthorizedTransfer)
        ));
    }

    #[test]
    fn same_card_is_unauthorized() {
        let from = card(1, OWNER, 100, CardStatus::Active);
        let to = card(1, OWNER, 100, CardStatus::Active);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(40)),
            Err(CoreError::UnauthorizedTransfer)
        ));
    }

    #[test]
    fn ownership_outranks_every_other_failure() {
        // foreign, blocked, overdrawn, non-positive amount: ownership reported
        let from = card(1, STRANGER, 0, CardStatus::Blocked);
        let to = card(2, STRANGER, 0, CardStatus::Expired);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(0)),
            Err(CoreError::UnauthorizedTransfer)
        ));
    }

    #[test]
    fn overdraft_is_insufficient_funds() {
        let from = card(1, OWNER, 10, CardStatus::Active);
        let to = card(2, OWNER, 0, CardStatus::Active);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(11)),
            Err(CoreError::InsufficientFunds(1))
        ));
    }

    #[test]
    fn balance_check_outranks_card_state() {
        // the overdraft is reported even though both cards would also fail
        // the status checks
        let from = card(1, OWNER, 10, CardStatus::Expired);
        let to = card(2, OWNER, 0, CardStatus::Blocked);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(11)),
            Err(CoreError::InsufficientFunds(1))
        ));
    }

    #[test]
    fn zero_and_negative_amounts_are_invalid() {
        let from = card(1, OWNER, 100, CardStatus::Active);
        let to = card(2, OWNER, 0, CardStatus::Active);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(0)),
            Err(CoreError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(-5)),
            Err(CoreError::InvalidAmount(_))
        ));
    }

    #[test]
    fn expired_card_is_reported_before_blocked() {
        let from = card(1, OWNER, 100, CardStatus::Blocked);
        let to = card(2, OWNER, 0, CardStatus::Expired);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(40)),
            Err(CoreError::CardExpired(2))
        ));
    }

    #[test]
    fn expired_source_reported_with_its_id() {
        let from = card(1, OWNER, 100, CardStatus::Expired);
        let to = card(2, OWNER, 0, CardStatus::Expired);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(40)),
            Err(CoreError::CardExpired(1))
        ));
    }

    #[test]
    fn blocked_cards_fail_on_either_side() {
        let from = card(1, OWNER, 100, CardStatus::Blocked);
        let to = card(2, OWNER, 0, CardStatus::Active);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(40)),
            Err(CoreError::CardBlocked(1))
        ));

        let from = card(1, OWNER, 100, CardStatus::Active);
        let to = card(2, OWNER, 0, CardStatus::Blocked);
        assert!(matches!(
            validate_transfer(&from, &to, OWNER, amount(40)),
            Err(CoreError::CardBlocked(2))
        ));
    }
}
