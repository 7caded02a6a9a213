//! Test card number generation.
//!
//! Generated numbers carry a prefix the BIN table classifies as the requested
//! network, the first length that network's profile accepts, and a valid Luhn
//! check digit. They are not connected to real accounts.
//!
//! # Example
//!
//! ```
//! use card_field::generate::{generate_pan_deterministic, CardGenerator};
//! use card_field::pan::validate_pan;
//! use card_field::PaymentNetwork;
//!
//! let pan = generate_pan_deterministic(PaymentNetwork::Mir);
//! assert_eq!(pan, "2200000000000004");
//! assert_eq!(validate_pan(&pan).unwrap().network(), PaymentNetwork::Mir);
//!
//! let pan = CardGenerator::new(PaymentNetwork::Visa).length(16).generate_deterministic();
//! assert_eq!(pan.as_deref(), Some("4000000000000002"));
//! ```

use crate::luhn;
use crate::network::{profile_for, PaymentNetwork};

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns a prefix the BIN table classifies as `network` first.
///
/// Networks outside the table get their commonly issued prefix, which no
/// validator here accepts.
pub const fn prefix_for_network(network: PaymentNetwork) -> &'static str {
    match network {
        PaymentNetwork::Mastercard => "51",
        PaymentNetwork::Electron => "4026",
        PaymentNetwork::Visa => "4",
        PaymentNetwork::Maestro => "5018",
        PaymentNetwork::Mir => "2200",
        PaymentNetwork::AmericanExpress => "34",
        PaymentNetwork::DinersClub => "36",
        PaymentNetwork::Discover => "6011",
        PaymentNetwork::Jcb => "3528",
        PaymentNetwork::UnionPay => "62",
        PaymentNetwork::UzCard => "8600",
        PaymentNetwork::Humo => "9860",
        PaymentNetwork::Troy => "9792",
    }
}

/// The length generated for `network`: the first its profile accepts.
pub fn default_length(network: PaymentNetwork) -> usize {
    profile_for(Some(network))
        .accepted_lengths
        .first()
        .map_or(16, |&len| len as usize)
}

/// Parses `prefix` into digits, or `None` if it is not all digits or leaves
/// no room for the check digit.
fn prefix_digits(prefix: &str, length: usize) -> Option<Vec<u8>> {
    if prefix.len() >= length || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut digits = Vec::with_capacity(length);
    digits.extend(prefix.bytes().map(|b| b - b'0'));
    Some(digits)
}

/// Pads `digits` to one short of `length` and appends the check digit.
fn complete(mut digits: Vec<u8>, length: usize, mut fill: impl FnMut() -> u8) -> String {
    while digits.len() < length - 1 {
        digits.push(fill());
    }

    digits.push(luhn::generate_check_digit(&digits));
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Generates a number for `network` with zero padding; the same input always
/// yields the same number.
pub fn generate_pan_deterministic(network: PaymentNetwork) -> String {
    let prefix = prefix_for_network(network);
    let length = default_length(network);
    let digits = prefix.bytes().map(|b| b - b'0').collect();
    complete(digits, length, || 0)
}

/// Generates a zero-padded number with a custom prefix.
///
/// Returns `None` if `prefix` is not all digits or is not shorter than `length`.
pub fn generate_pan_deterministic_with_prefix(prefix: &str, length: usize) -> Option<String> {
    prefix_digits(prefix, length).map(|digits| complete(digits, length, || 0))
}

/// Generates a random number for `network`.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_pan(network: PaymentNetwork) -> String {
    let prefix = prefix_for_network(network);
    let length = default_length(network);
    let mut rng = rand::thread_rng();
    let digits = prefix.bytes().map(|b| b - b'0').collect();
    complete(digits, length, || rng.gen_range(0..10))
}

/// Generates a random number with a custom prefix.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_pan_with_prefix(prefix: &str, length: usize) -> Option<String> {
    generate_pan_with_rng(prefix, length, &mut rand::thread_rng())
}

/// Generates a number using a provided RNG, e.g. a seeded one.
#[cfg(feature = "generate")]
pub fn generate_pan_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> Option<String> {
    prefix_digits(prefix, length).map(|digits| complete(digits, length, || rng.gen_range(0..10)))
}

/// Generates `count` random numbers for `network`.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_pans(network: PaymentNetwork, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_pan(network)).collect()
}

/// Builder for generating numbers with a chosen prefix and length.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    prefix: String,
    length: usize,
}

impl CardGenerator {
    /// Creates a generator for `network`.
    pub fn new(network: PaymentNetwork) -> Self {
        Self {
            prefix: prefix_for_network(network).to_string(),
            length: default_length(network),
        }
    }

    /// Creates a 16-digit generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            length: 16,
        }
    }

    /// Sets the number length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Generates a zero-padded number.
    pub fn generate_deterministic(&self) -> Option<String> {
        generate_pan_deterministic_with_prefix(&self.prefix, self.length)
    }

    /// Generates a random number.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> Option<String> {
        generate_pan_with_prefix(&self.prefix, self.length)
    }

    /// Generates `count` random numbers.
    #[cfg(feature = "generate")]
    pub fn generate_many(&self, count: usize) -> Vec<String> {
        (0..count).filter_map(|_| self.generate()).collect()
    }
}
