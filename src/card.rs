//! Raw form input and the validated card record.

use std::fmt;

use crate::csc::Csc;
use crate::expiry::Expiry;
use crate::format::format_for_network;
use crate::network::PaymentNetwork;
use crate::pan::Pan;

/// Unvalidated field text as submitted by the form.
///
/// The card number must already be stripped of formatting; the expiry is the
/// (month, year) pair.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawCard<'a> {
    /// Card number digits.
    pub pan: &'a str,
    /// Expiry month and two-digit year.
    pub expiry: (&'a str, &'a str),
    /// Security code.
    pub csc: &'a str,
}

impl<'a> RawCard<'a> {
    /// Bundles the raw field text.
    #[inline]
    pub const fn new(pan: &'a str, month: &'a str, year: &'a str, csc: &'a str) -> Self {
        Self {
            pan,
            expiry: (month, year),
            csc,
        }
    }
}

impl fmt::Debug for RawCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Raw input may hold a full card number; only lengths are shown.
        f.debug_struct("RawCard")
            .field("pan_len", &self.pan.len())
            .field("expiry", &self.expiry)
            .field("csc_len", &self.csc.len())
            .finish()
    }
}

/// A card whose number, expiry and security code all passed validation.
///
/// Only produced by whole-card validation or by decoding text that itself
/// validates; there is no way to build a partially valid record. `Debug` and
/// `Display` never show the full number or the security code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCard {
    pan: Pan,
    expiry: Expiry,
    csc: Csc,
}

impl ValidatedCard {
    #[inline]
    pub(crate) fn new(pan: Pan, expiry: Expiry, csc: Csc) -> Self {
        Self { pan, expiry, csc }
    }

    /// The validated card number.
    #[inline]
    pub fn pan(&self) -> &Pan {
        &self.pan
    }

    /// The validated expiry.
    #[inline]
    pub fn expiry(&self) -> &Expiry {
        &self.expiry
    }

    /// The validated security code.
    #[inline]
    pub fn csc(&self) -> &Csc {
        &self.csc
    }

    /// The network the number was validated against.
    #[inline]
    pub fn network(&self) -> PaymentNetwork {
        self.pan.network()
    }

    /// Last four digits of the number.
    #[inline]
    pub fn last_four(&self) -> &str {
        self.pan.last_four()
    }

    /// The number masked for display, e.g. `411111******1111`.
    #[inline]
    pub fn masked_pan(&self) -> String {
        self.pan.masked()
    }

    /// The full number laid out with its network's display mask.
    ///
    /// # Security Warning
    ///
    /// This exposes the full number.
    #[inline]
    pub fn formatted_pan(&self) -> String {
        format_for_network(self.pan.as_str(), Some(self.network()))
    }

    /// Encodes the card as a single line; see [`codec`](crate::codec).
    #[inline]
    pub fn to_text(&self) -> String {
        crate::codec::to_text(self)
    }
}

impl fmt::Display for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.network(), self.masked_pan(), self.expiry)
    }
}
