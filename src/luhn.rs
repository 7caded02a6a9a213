//! Luhn (mod 10) checksum.
//!
//! Card numbers carry a trailing check digit chosen so that the weighted digit
//! sum is a multiple of ten. This catches every single-digit typo and most
//! transpositions of adjacent digits.

/// Doubled digit with 9 subtracted when the result exceeds 9, indexed by digit.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a slice of digit values (0-9) with the Luhn algorithm.
///
/// Returns `false` for an empty slice.
///
/// # Example
///
/// ```
/// use card_field::luhn::validate;
///
/// assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Checks a digit string with the Luhn algorithm.
///
/// Walks the digits from the right. The check digit (distance 0 from the end)
/// is taken as is, the digit before it is doubled, and so on alternately.
/// Any non-digit character makes the string invalid, as does an empty string.
///
/// # Example
///
/// ```
/// use card_field::luhn::luhn_check;
///
/// assert!(luhn_check("4111111111111111"));
/// assert!(!luhn_check("4111111111111112"));
/// assert!(!luhn_check("4111-1111"));
/// ```
pub fn luhn_check(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    validate(&values)
}

/// Computes the Luhn sum (before the modulo) of a slice of digit values.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(distance, &digit)| {
            if distance % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Computes the check digit to append to `digits` so the result passes Luhn.
///
/// # Example
///
/// ```
/// use card_field::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every digit moves one place left once the check digit is appended,
    // so the doubling parity flips relative to `compute_checksum`.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(distance, &digit)| {
            if distance % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
