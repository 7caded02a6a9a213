//! Display masks and live input formatting.
//!
//! A display mask is a pattern such as `0000 000000 00000` in which each
//! placeholder (`0` by default) takes the next digit of the number and every
//! other character is copied through. Each network carries its own mask in its
//! [`NetworkProfile`](crate::network::NetworkProfile).
//!
//! # Example
//!
//! ```
//! use card_field::format::{format_pan, preview, strip_formatting};
//! use card_field::PaymentNetwork;
//!
//! assert_eq!(format_pan("378282246310005", "0000 000000 00000", '0'), "3782 822463 10005");
//! assert_eq!(strip_formatting("4111 1111-1111"), "411111111111");
//!
//! let p = preview("3782 8224");
//! assert_eq!(p.network, Some(PaymentNetwork::AmericanExpress));
//! assert_eq!(p.formatted, "3782 8224");
//! assert_eq!(p.max_length, 15);
//! ```

use crate::network::{
    detect_networks_in, profile_for, PaymentNetwork, ACCEPTED_NETWORKS, MASK_PLACEHOLDER,
};

/// Lays `pan` out over `mask`.
///
/// Walks the mask left to right, copying literal characters and substituting
/// the next digit at each `placeholder`. Output stops at the first placeholder
/// left without a digit, so literals directly after the last digit are kept.
/// Digits beyond the mask are dropped.
///
/// # Example
///
/// ```
/// use card_field::format::format_pan;
///
/// assert_eq!(format_pan("4111111111111111", "0000 0000 0000 0000", '0'), "4111 1111 1111 1111");
/// assert_eq!(format_pan("411111", "0000 0000 0000 0000", '0'), "4111 11");
/// assert_eq!(format_pan("4111", "0000 0000 0000 0000", '0'), "4111 ");
/// assert_eq!(format_pan("", "0000 0000", '0'), "");
/// ```
pub fn format_pan(pan: &str, mask: &str, placeholder: char) -> String {
    let mut digits = pan.chars();
    let mut result = String::with_capacity(mask.len());

    for c in mask.chars() {
        if c == placeholder {
            match digits.next() {
                Some(digit) => result.push(digit),
                None => break,
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Lays `pan` out with the display mask of `network`, or the default mask.
///
/// # Example
///
/// ```
/// use card_field::format::format_for_network;
/// use card_field::PaymentNetwork;
///
/// assert_eq!(
///     format_for_network("30569309025904", Some(PaymentNetwork::DinersClub)),
///     "3056 9309 0259 04"
/// );
/// assert_eq!(format_for_network("12345678", None), "1234 5678");
/// ```
#[inline]
pub fn format_for_network(pan: &str, network: Option<PaymentNetwork>) -> String {
    format_pan(pan, profile_for(network).display_mask, MASK_PLACEHOLDER)
}

/// Keeps only the ASCII digits of `input`.
///
/// # Example
///
/// ```
/// use card_field::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// What a number input should show while the user types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanPreview {
    /// First detected network, if any.
    pub network: Option<PaymentNetwork>,
    /// The digits laid out with the network's display mask.
    pub formatted: String,
    /// Longest number the network issues; input beyond it can be refused.
    pub max_length: usize,
}

/// Previews partial input against the accepted networks.
#[inline]
pub fn preview(raw: &str) -> PanPreview {
    preview_in(raw, ACCEPTED_NETWORKS)
}

/// Previews partial input against `allowed` networks.
pub fn preview_in(raw: &str, allowed: &[PaymentNetwork]) -> PanPreview {
    let digits = strip_formatting(raw);
    let network = detect_networks_in(&digits, allowed).first().copied();
    let profile = profile_for(network);

    PanPreview {
        network,
        formatted: format_pan(&digits, profile.display_mask, MASK_PLACEHOLDER),
        max_length: profile.max_length(),
    }
}
