//! Display masking and constant-time comparison.
//!
//! A masked card number keeps the BIN (first 6 digits) and the last 4 digits
//! and replaces everything between with `*`, preserving the original length:
//! `4111111111111111` becomes `411111******1111`.

/// Digits kept at the front of a masked number.
pub const KEPT_PREFIX: usize = 6;

/// Digits kept at the end of a masked number.
pub const KEPT_SUFFIX: usize = 4;

/// Shortest number [`mask_pan`] accepts.
pub const MIN_MASKABLE_LENGTH: usize = KEPT_PREFIX + KEPT_SUFFIX;

/// Masks a card number for display.
///
/// Returns `None` unless `pan` is all ASCII digits and at least
/// [`MIN_MASKABLE_LENGTH`] long. In particular an already-masked number is
/// rejected rather than masked again.
///
/// # Example
///
/// ```
/// use card_field::mask::mask_pan;
///
/// assert_eq!(mask_pan("4111111111111111").as_deref(), Some("411111******1111"));
/// assert_eq!(mask_pan("4111111111"), Some("4111111111".to_string()));
/// assert_eq!(mask_pan("411111111"), None);
/// assert_eq!(mask_pan("411111******1111"), None);
/// ```
pub fn mask_pan(pan: &str) -> Option<String> {
    if pan.len() < MIN_MASKABLE_LENGTH || !pan.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(mask_digits(pan))
}

/// Masks a digit string that is known to be valid.
///
/// Numbers too short to keep both ends are fully starred.
pub(crate) fn mask_digits(digits: &str) -> String {
    let len = digits.len();

    if len < MIN_MASKABLE_LENGTH {
        return "*".repeat(len);
    }

    let mut result = String::with_capacity(len);
    result.push_str(&digits[..KEPT_PREFIX]);
    result.extend(std::iter::repeat('*').take(len - MIN_MASKABLE_LENGTH));
    result.push_str(&digits[len - KEPT_SUFFIX..]);
    result
}

/// Constant-time comparison of two byte slices.
///
/// Takes the same time wherever the slices differ. Slices of different
/// lengths compare unequal immediately.
///
/// # Example
///
/// ```
/// use card_field::mask::constant_time_eq;
///
/// assert!(constant_time_eq(b"4111111111111111", b"4111111111111111"));
/// assert!(!constant_time_eq(b"4111111111111111", b"4111111111111112"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}

/// Constant-time comparison of two strings.
#[inline]
pub fn constant_time_eq_str(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
