//! One display string per form field.
//!
//! Validators report structured failures; a form shows one line of text under
//! each input. The adapter turns a validation result into that line: empty on
//! success, the reason after the first `": "` of the failure message, or the
//! locale's generic message when no reason can be isolated.
//!
//! # Example
//!
//! ```
//! use card_field::message::{adapt_message, MessageAdapter};
//! use card_field::Locale;
//!
//! assert_eq!(adapt_message("pan: Incomplete card number", "fallback"), "Incomplete card number");
//! assert_eq!(adapt_message("no separator here", "fallback"), "fallback");
//!
//! let messages = MessageAdapter::new(Locale::Ru);
//! assert_eq!(messages.pan("4111"), "Неполный номер карты");
//! assert_eq!(messages.pan("4111111111111111"), "");
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::csc::validate_csc;
use crate::error::{Field, InField, Locale};
use crate::expiry::{split_expiry, validate_expiry_at};
use crate::network::{PaymentNetwork, ACCEPTED_NETWORKS};
use crate::pan::validate_pan_in;

/// Separates a structured prefix from the human-readable reason.
pub const REASON_SEPARATOR: &str = ": ";

/// Returns the text after the first [`REASON_SEPARATOR`] in `message`, or
/// `fallback` if there is none.
#[inline]
pub fn adapt_message<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    message
        .split_once(REASON_SEPARATOR)
        .map_or(fallback, |(_, reason)| reason)
}

/// Produces per-field display messages in one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAdapter {
    locale: Locale,
    networks: Vec<PaymentNetwork>,
}

impl Default for MessageAdapter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl MessageAdapter {
    /// Creates an adapter for `locale` over the accepted networks.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            networks: ACCEPTED_NETWORKS.to_vec(),
        }
    }

    /// Restricts card number messages to `networks`.
    pub fn with_networks(mut self, networks: Vec<PaymentNetwork>) -> Self {
        self.networks = networks;
        self
    }

    /// The message locale.
    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The display line for a validation result.
    pub fn adapt<T, E: fmt::Display>(&self, result: &Result<T, E>) -> String {
        match result {
            Ok(_) => String::new(),
            Err(err) => adapt_message(&err.to_string(), self.locale.generic_message()).to_string(),
        }
    }

    /// Wraps any validator so that it yields display lines.
    ///
    /// # Example
    ///
    /// ```
    /// use card_field::message::MessageAdapter;
    ///
    /// let messages = MessageAdapter::default();
    /// let not_empty = messages.validator_of(|s: &str| {
    ///     if s.is_empty() { Err("name: Required") } else { Ok(()) }
    /// });
    /// assert_eq!(not_empty(""), "Required");
    /// assert_eq!(not_empty("Ann"), "");
    /// ```
    pub fn validator_of<T, E, F>(&self, validate: F) -> impl Fn(&str) -> String
    where
        E: fmt::Display,
        F: Fn(&str) -> Result<T, E>,
    {
        let fallback = self.locale.generic_message();
        move |input| match validate(input) {
            Ok(_) => String::new(),
            Err(err) => adapt_message(&err.to_string(), fallback).to_string(),
        }
    }

    /// Display line for the card number input (digits only).
    pub fn pan(&self, raw: &str) -> String {
        let result = validate_pan_in(raw, &self.networks)
            .in_field(Field::Pan)
            .map_err(|e| e.localized(self.locale));
        self.adapt(&result)
    }

    /// Display line for the `MM/YY` expiry input.
    #[inline]
    pub fn expiry(&self, text: &str) -> String {
        self.expiry_at(text, Utc::now())
    }

    /// Like [`expiry`](Self::expiry), at `now`.
    pub fn expiry_at(&self, text: &str, now: DateTime<Utc>) -> String {
        let result = split_expiry(text)
            .and_then(|(month, year)| validate_expiry_at(month, year, now))
            .in_field(Field::Expiry)
            .map_err(|e| e.localized(self.locale));
        self.adapt(&result)
    }

    /// Display line for the security code input.
    pub fn csc(&self, raw: &str) -> String {
        let result = validate_csc(raw)
            .in_field(Field::Csc)
            .map_err(|e| e.localized(self.locale));
        self.adapt(&result)
    }
}
