//! Single-line text encoding of a validated card.
//!
//! The encoding is `PAN,MM/YY,CSC`, for example `4111111111111111,12/40,123`.
//! Decoding re-runs full validation, so text that does not describe a valid
//! card fails with the same [`FieldError`] vocabulary as
//! [`validate`](crate::validate).
//!
//! # Security Warning
//!
//! The encoded line contains the full number and the security code.

use chrono::{DateTime, Utc};

use crate::card::{RawCard, ValidatedCard};
use crate::error::FieldError;
use crate::validate::CardValidator;

/// Separates the number, expiry and security code.
pub const DELIMITER: char = ',';

/// Separates expiry month and year.
pub const EXPIRY_SEPARATOR: char = '/';

/// Encodes a validated card as `PAN,MM/YY,CSC`.
///
/// # Example
///
/// ```
/// use card_field::{codec, validate, RawCard};
///
/// let card = validate(&RawCard::new("4111111111111111", "7", "40", "123")).unwrap();
/// assert_eq!(codec::to_text(&card), "4111111111111111,07/40,123");
/// ```
pub fn to_text(card: &ValidatedCard) -> String {
    let pan = card.pan().as_str();
    let csc = card.csc().as_str();

    let mut text = String::with_capacity(pan.len() + csc.len() + 7);
    text.push_str(pan);
    text.push(DELIMITER);
    text.push_str(&card.expiry().to_string());
    text.push(DELIMITER);
    text.push_str(csc);
    text
}

/// Decodes and validates a card with the default configuration.
///
/// # Example
///
/// ```
/// use card_field::{codec, ErrorReason, Field};
///
/// let card = codec::from_text("5500000000000004,12/40,1234").unwrap();
/// assert_eq!(card.last_four(), "0004");
///
/// let err = codec::from_text("5500000000000004,12-40,1234").unwrap_err();
/// assert_eq!(err.field, Field::Expiry);
/// assert_eq!(err.reason, ErrorReason::OnlyDigitsAllowed);
/// ```
#[inline]
pub fn from_text(text: &str) -> Result<ValidatedCard, FieldError> {
    from_text_at(text, Utc::now())
}

/// Like [`from_text`], at `now`.
#[inline]
pub fn from_text_at(text: &str, now: DateTime<Utc>) -> Result<ValidatedCard, FieldError> {
    from_text_with(&CardValidator::default(), text, now)
}

/// Decodes `text` and validates it with `validator` at `now`.
///
/// A missing segment decodes as empty text, so the first failing field is
/// reported in the same order as [`validate`](crate::validate). Extra
/// delimiters end up in the security code segment, which then fails.
pub fn from_text_with(
    validator: &CardValidator,
    text: &str,
    now: DateTime<Utc>,
) -> Result<ValidatedCard, FieldError> {
    let mut parts = text.splitn(3, DELIMITER);

    let pan = parts.next().unwrap_or_default();
    let expiry = parts.next().unwrap_or_default();
    let csc = parts.next().unwrap_or_default();

    let (month, year) = expiry
        .split_once(EXPIRY_SEPARATOR)
        .unwrap_or((expiry, ""));

    validator.validate_at(&RawCard::new(pan, month, year, csc), now)
}
