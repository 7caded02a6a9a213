//! Card security code (CSC, also CVV/CVC/CID) validation.
//!
//! Any accepted network may carry a 3- or 4-digit code; the length is not
//! tied to the network.
//!
//! # Example
//!
//! ```
//! use card_field::csc::validate_csc;
//! use card_field::ErrorReason;
//!
//! assert_eq!(validate_csc("123").unwrap().length(), 3);
//! assert_eq!(validate_csc("1234").unwrap().length(), 4);
//! assert_eq!(validate_csc("12").unwrap_err(), ErrorReason::OnlyDigitsAllowed);
//! ```

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ErrorReason;
use crate::mask::constant_time_eq;

/// A validated security code.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Csc {
    /// ASCII digits; only the first `length` bytes are meaningful.
    digits: [u8; 4],
    /// Number of digits (3 or 4).
    length: u8,
}

impl Csc {
    /// Returns the code as a string.
    ///
    /// # Security Warning
    ///
    /// Never log the result.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.digits[..self.length as usize]).unwrap_or_default()
    }

    /// Returns the number of digits.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length as usize
    }

    /// Returns true if this is a 4-digit code.
    #[inline]
    pub const fn is_four_digit(&self) -> bool {
        self.length == 4
    }
}

impl PartialEq for Csc {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(
            &self.digits[..self.length as usize],
            &other.digits[..other.length as usize],
        )
    }
}

impl Eq for Csc {}

impl fmt::Debug for Csc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Csc")
            .field("value", &"***")
            .field("length", &self.length)
            .finish()
    }
}

impl fmt::Display for Csc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "*".repeat(self.length as usize))
    }
}

/// Validates a security code: exactly 3 or 4 ASCII digits.
pub fn validate_csc(raw: &str) -> Result<Csc, ErrorReason> {
    let bytes = raw.as_bytes();

    if !(3..=4).contains(&bytes.len()) || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(ErrorReason::OnlyDigitsAllowed);
    }

    let mut digits = [0u8; 4];
    digits[..bytes.len()].copy_from_slice(bytes);

    Ok(Csc {
        digits,
        length: bytes.len() as u8,
    })
}

/// Checks if a string is a valid security code.
#[inline]
pub fn is_valid_csc(raw: &str) -> bool {
    validate_csc(raw).is_ok()
}
