//! Card number (PAN) validation.
//!
//! The validator expects the raw field with formatting already stripped (see
//! [`strip_formatting`](crate::format::strip_formatting)); it still rejects
//! anything that is not purely digits before running any semantic check.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ErrorReason;
use crate::luhn;
use crate::mask::{constant_time_eq_str, mask_digits};
use crate::network::{detect_networks_in, profile_for, PaymentNetwork, ACCEPTED_NETWORKS};

/// Fewest digits needed before a number can be classified.
pub const MIN_CLASSIFIABLE_DIGITS: usize = 6;

/// A validated card number.
///
/// Holds the canonical digit string and the network it was validated
/// against. The digits are wiped from memory on drop and never appear in
/// `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Pan {
    digits: String,
    #[zeroize(skip)]
    network: PaymentNetwork,
}

impl Pan {
    /// The full card number.
    ///
    /// # Security Warning
    ///
    /// Never log the result. Use [`masked`](Self::masked) for display.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The first detected network, whose profile the number was checked against.
    #[inline]
    pub const fn network(&self) -> PaymentNetwork {
        self.network
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True only once the digits have been zeroized.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// First six digits.
    #[inline]
    pub fn bin(&self) -> &str {
        &self.digits[..self.digits.len().min(MIN_CLASSIFIABLE_DIGITS)]
    }

    /// Last four digits.
    #[inline]
    pub fn last_four(&self) -> &str {
        &self.digits[self.digits.len().saturating_sub(4)..]
    }

    /// The number with everything between the BIN and the last four digits
    /// replaced by `*`, e.g. `411111******1111`.
    #[inline]
    pub fn masked(&self) -> String {
        mask_digits(&self.digits)
    }
}

impl PartialEq for Pan {
    fn eq(&self, other: &Self) -> bool {
        self.network == other.network && constant_time_eq_str(&self.digits, &other.digits)
    }
}

impl Eq for Pan {}

impl fmt::Debug for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pan")
            .field("network", &self.network)
            .field("number", &self.masked())
            .finish()
    }
}

/// Validates a card number against the default accepted networks.
///
/// # Example
///
/// ```
/// use card_field::pan::validate_pan;
/// use card_field::{ErrorReason, PaymentNetwork};
///
/// let pan = validate_pan("4111111111111111").unwrap();
/// assert_eq!(pan.network(), PaymentNetwork::Visa);
///
/// assert_eq!(validate_pan("4111111111111112").unwrap_err(), ErrorReason::InvalidNumber);
/// assert_eq!(validate_pan("4111 1111").unwrap_err(), ErrorReason::OnlyDigitsAllowed);
/// ```
pub fn validate_pan(raw: &str) -> Result<Pan, ErrorReason> {
    validate_pan_in(raw, ACCEPTED_NETWORKS)
}

/// Validates a card number, classifying it only among `allowed` networks.
///
/// Checks run in a fixed order: digits only, at least six digits, a matching
/// network, a length that network issues, and finally the Luhn checksum.
/// Only the first detected network's lengths are consulted.
pub fn validate_pan_in(raw: &str, allowed: &[PaymentNetwork]) -> Result<Pan, ErrorReason> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorReason::OnlyDigitsAllowed);
    }

    if raw.len() < MIN_CLASSIFIABLE_DIGITS {
        return Err(ErrorReason::IncompleteNumber);
    }

    let network = detect_networks_in(raw, allowed)
        .first()
        .copied()
        .ok_or(ErrorReason::UnsupportedNetwork)?;

    if !profile_for(Some(network)).accepts_length(raw.len()) {
        return Err(ErrorReason::IncompleteNumber);
    }

    if !luhn::luhn_check(raw) {
        return Err(ErrorReason::InvalidNumber);
    }

    Ok(Pan {
        digits: raw.to_string(),
        network,
    })
}
