//! Card number generation, masking and at-rest encoding.
//!
//! Plaintext numbers exist only in memory: storage holds the base64-encoded
//! form plus a pre-computed mask, and every API response carries the mask
//! only. Base64 is a stand-in for a real cipher; the call sites go through
//! [`encode`]/[`decode`] so the scheme can be swapped without touching them.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::Rng;

use crate::error::CoreError;

pub const CARD_NUMBER_LEN: usize = 16;
const MASK_PREFIX: &str = "**** **** **** ";

/// Generate a random 16-digit card number.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..CARD_NUMBER_LEN)
        .map(|_| {
            let digit: u8 = rng.gen_range(0..10);
            char::from(b'0' + digit)
        })
        .collect()
}

/// A valid card number is exactly 16 ASCII digits.
pub fn is_valid(number: &str) -> bool {
    number.len() == CARD_NUMBER_LEN && number.bytes().all(|b| b.is_ascii_digit())
}

/// Keep the last four digits, hide the rest: `**** **** **** 1234`.
pub fn mask(number: &str) -> String {
    let tail = if number.len() >= 4 {
        &number[number.len() - 4..]
    } else {
        number
    };
    format!("{MASK_PREFIX}{tail}")
}

/// Encode a plaintext number for storage.
pub fn encode(number: &str) -> String {
    BASE64.encode(number.as_bytes())
}

/// Decode a stored number back to plaintext.
///
/// Fails with [`CoreError::CardEncryption`] when the stored value is not
/// valid base64/UTF-8, and [`CoreError::InvalidCardNumber`] when the decoded
/// payload is not a 16-digit number.
pub fn decode(encoded: &str) -> Result<String, CoreError> {
    let bytes = BASE64
        .decode(encoded)
        .map_err(|_| CoreError::CardEncryption)?;
    let number = String::from_utf8(bytes).map_err(|_| CoreError::CardEncryption)?;
    if !is_valid(&number) {
        return Err(CoreError::InvalidCardNumber);
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_numbers_are_sixteen_digits() {
        for _ in 0..100 {
            let number = generate();
            assert_eq!(number.len(), CARD_NUMBER_LEN);
            assert!(is_valid(&number), "not all digits: {number}");
        }
    }

    #[test]
    fn validity_checks_length_and_digits() {
        assert!(is_valid("1234567890123456"));
        assert!(!is_valid("123456789012345"));
        assert!(!is_valid("12345678901234567"));
        assert!(!is_valid("123456789012345x"));
        assert!(!is_valid(""));
    }

    #[test]
    fn mask_keeps_only_last_four() {
        assert_eq!(mask("1234567890123456"), "**** **** **** 3456");
        assert_eq!(mask("9999"), "**** **** **** 9999");
        assert_eq!(mask("12"), "**** **** **** 12");
    }

    #[test]
    fn encode_decode_round_trip() {
        let number = "4276550012345678";
        let stored = encode(number);
        assert_ne!(stored, number);
        assert_eq!(decode(&stored).unwrap(), number);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            decode("!!not-base64!!"),
            Err(CoreError::CardEncryption)
        ));
        // valid base64, but not a card number
        assert!(matches!(
            decode(&BASE64.encode("hello")),
            Err(CoreError::InvalidCardNumber)
        ));
    }
}
