//! Card expiry validation.
//!
//! The expiry field arrives as a month/year text pair, e.g. `("7", "27")` or
//! `("07", "27")`. A card stays valid through the last day of its expiry
//! month, so the cut-off instant is 00:00 UTC on the first day of the
//! following month.
//!
//! # Example
//!
//! ```
//! use card_field::expiry::validate_expiry_at;
//! use card_field::ErrorReason;
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
//!
//! let expiry = validate_expiry_at("10", "26", now).unwrap();
//! assert_eq!(expiry.full_year(), 2026);
//!
//! assert_eq!(validate_expiry_at("9", "26", now).unwrap_err(), ErrorReason::CardExpired);
//! assert_eq!(validate_expiry_at("13", "26", now).unwrap_err(), ErrorReason::OnlyDigitsAllowed);
//! ```

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use std::fmt;

use crate::error::ErrorReason;

/// Two-digit years resolve into the 2000s only while that stays below
/// `current year + MAX_CARD_ISSUE_YEARS`.
pub const MAX_CARD_ISSUE_YEARS: i32 = 30;

/// A well-formed expiry month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expiry {
    /// Month (1-12).
    month: u8,
    /// Year as entered (00-99).
    year: u8,
    /// Four-digit year the two digits resolved to.
    full_year: u16,
}

impl Expiry {
    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the two-digit year as entered.
    #[inline]
    pub const fn year(&self) -> u8 {
        self.year
    }

    /// Returns the resolved four-digit year.
    #[inline]
    pub const fn full_year(&self) -> u16 {
        self.full_year
    }

    /// The first instant at which the card is no longer valid.
    pub fn expires_at(&self) -> DateTime<Utc> {
        let (year, month) = if self.month == 12 {
            (self.full_year as i32 + 1, 1)
        } else {
            (self.full_year as i32, self.month as u32 + 1)
        };

        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Returns true if the card has expired at `now`.
    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at() < now
    }

    /// Returns true if the card has expired.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whole months left before expiry at `now`, 0 if already expired.
    pub fn months_until_expiry_at(&self, now: DateTime<Utc>) -> u32 {
        let expiry_months = self.full_year as i64 * 12 + self.month as i64;
        let current_months = now.year() as i64 * 12 + now.month() as i64;
        (expiry_months - current_months).max(0) as u32
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

/// Resolves a two-digit year against the current year.
///
/// Years that would land [`MAX_CARD_ISSUE_YEARS`] or more ahead are read as
/// the previous century, so in 2026 `55` is 2055 and `56` is 1956. This is
/// a real sliding window: a card printed `56` is treated as expired, not as
/// valid until 2056.
///
/// # Example
///
/// ```
/// use card_field::expiry::resolve_expiry_year_at;
///
/// assert_eq!(resolve_expiry_year_at(27, 2026), 2027);
/// assert_eq!(resolve_expiry_year_at(55, 2026), 2055);
/// assert_eq!(resolve_expiry_year_at(56, 2026), 1956);
/// ```
pub fn resolve_expiry_year_at(year: u8, current_year: i32) -> u16 {
    let candidate = 2000 + year as u16;
    if (candidate as i32) < current_year + MAX_CARD_ISSUE_YEARS {
        candidate
    } else {
        1900 + year as u16
    }
}

/// Resolves a two-digit year against the current UTC year.
#[inline]
pub fn resolve_expiry_year(year: u8) -> u16 {
    resolve_expiry_year_at(year, Utc::now().year())
}

/// Parses a month matching `0?[1-9]|1[0-2]`.
fn parse_month(text: &str) -> Option<u8> {
    match text.as_bytes() {
        [d @ b'1'..=b'9'] | [b'0', d @ b'1'..=b'9'] => Some(d - b'0'),
        [b'1', d @ b'0'..=b'2'] => Some(10 + d - b'0'),
        _ => None,
    }
}

/// Parses a year of exactly two digits.
fn parse_year(text: &str) -> Option<u8> {
    match text.as_bytes() {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => Some((tens - b'0') * 10 + (ones - b'0')),
        _ => None,
    }
}

/// Parses a month/year pair without checking whether it has passed.
///
/// The year is resolved against the year of `now`.
pub fn parse_expiry_at(month: &str, year: &str, now: DateTime<Utc>) -> Result<Expiry, ErrorReason> {
    let (month, year) = match (parse_month(month), parse_year(year)) {
        (Some(month), Some(year)) => (month, year),
        _ => return Err(ErrorReason::OnlyDigitsAllowed),
    };

    Ok(Expiry {
        month,
        year,
        full_year: resolve_expiry_year_at(year, now.year()),
    })
}

/// Parses a month/year pair without checking whether it has passed.
#[inline]
pub fn parse_expiry(month: &str, year: &str) -> Result<Expiry, ErrorReason> {
    parse_expiry_at(month, year, Utc::now())
}

/// Validates a month/year pair at `now`.
pub fn validate_expiry_at(month: &str, year: &str, now: DateTime<Utc>) -> Result<Expiry, ErrorReason> {
    let expiry = parse_expiry_at(month, year, now)?;

    if expiry.is_expired_at(now) {
        return Err(ErrorReason::CardExpired);
    }

    Ok(expiry)
}

/// Validates a month/year pair against the current moment.
#[inline]
pub fn validate_expiry(month: &str, year: &str) -> Result<Expiry, ErrorReason> {
    validate_expiry_at(month, year, Utc::now())
}

/// Splits a single `MM/YY` input into its month and year parts.
///
/// Anything other than exactly two `/`-separated parts is a format error.
///
/// # Example
///
/// ```
/// use card_field::expiry::split_expiry;
///
/// assert_eq!(split_expiry("07/27"), Ok(("07", "27")));
/// assert!(split_expiry("0727").is_err());
/// assert!(split_expiry("07/27/1").is_err());
/// ```
pub fn split_expiry(text: &str) -> Result<(&str, &str), ErrorReason> {
    let mut parts = text.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(month), Some(year), None) => Ok((month, year)),
        _ => Err(ErrorReason::OnlyDigitsAllowed),
    }
}

/// Validates a single `MM/YY` input against the current moment.
pub fn validate_expiry_text(text: &str) -> Result<Expiry, ErrorReason> {
    let (month, year) = split_expiry(text)?;
    validate_expiry(month, year)
}
