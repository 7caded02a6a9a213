//! Whole-card validation.
//!
//! Runs the three field validators in a fixed order (number, expiry, security
//! code) and stops at the first failing field. The current moment is read once
//! per call.

use chrono::{DateTime, Utc};

use crate::card::{RawCard, ValidatedCard};
use crate::config::ValidatorConfig;
use crate::csc::validate_csc;
use crate::error::{Field, FieldError, InField};
use crate::expiry::{split_expiry, validate_expiry_at};
use crate::format::strip_formatting;
use crate::message::MessageAdapter;
use crate::network::{detect_networks_in, PaymentNetwork};
use crate::pan::validate_pan_in;

/// Validates a card against the default configuration.
///
/// # Example
///
/// ```
/// use card_field::{validate, ErrorReason, Field, RawCard};
///
/// let card = validate(&RawCard::new("5500000000000004", "12", "40", "123")).unwrap();
/// assert_eq!(card.masked_pan(), "550000******0004");
///
/// let err = validate(&RawCard::new("5500000000000005", "12", "40", "123")).unwrap_err();
/// assert_eq!(err.field, Field::Pan);
/// assert_eq!(err.reason, ErrorReason::InvalidNumber);
/// ```
#[inline]
pub fn validate(raw: &RawCard<'_>) -> Result<ValidatedCard, FieldError> {
    CardValidator::default().validate(raw)
}

/// Validates a card against the default configuration at `now`.
#[inline]
pub fn validate_at(raw: &RawCard<'_>, now: DateTime<Utc>) -> Result<ValidatedCard, FieldError> {
    CardValidator::default().validate_at(raw, now)
}

/// Returns true if the card validates against the default configuration.
#[inline]
pub fn is_valid(raw: &RawCard<'_>) -> bool {
    validate(raw).is_ok()
}

/// A configured card validator.
///
/// Holds no mutable state; one instance can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardValidator {
    config: ValidatorConfig,
}

impl CardValidator {
    /// Creates a validator with the given configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Networks card numbers are classified among.
    #[inline]
    pub fn networks(&self) -> &[PaymentNetwork] {
        &self.config.networks
    }

    /// Validates a card against the current moment.
    #[inline]
    pub fn validate(&self, raw: &RawCard<'_>) -> Result<ValidatedCard, FieldError> {
        self.validate_at(raw, Utc::now())
    }

    /// Validates a card at `now`.
    pub fn validate_at(
        &self,
        raw: &RawCard<'_>,
        now: DateTime<Utc>,
    ) -> Result<ValidatedCard, FieldError> {
        let result = self.validate_fields(raw, now);

        match &result {
            Ok(card) => tracing::debug!(
                network = %card.network(),
                pan = %card.masked_pan(),
                "card validated"
            ),
            Err(err) => tracing::debug!(
                field = %err.field,
                code = err.reason.code(),
                "card validation failed"
            ),
        }

        result
    }

    fn validate_fields(
        &self,
        raw: &RawCard<'_>,
        now: DateTime<Utc>,
    ) -> Result<ValidatedCard, FieldError> {
        let pan = validate_pan_in(raw.pan, &self.config.networks).in_field(Field::Pan)?;
        let (month, year) = raw.expiry;
        let expiry = validate_expiry_at(month, year, now).in_field(Field::Expiry)?;
        let csc = validate_csc(raw.csc).in_field(Field::Csc)?;

        Ok(ValidatedCard::new(pan, expiry, csc))
    }

    /// Validates the three inputs exactly as a form submits them.
    ///
    /// The card number may carry display formatting (spaces from the input
    /// mask), which is stripped; the expiry is a single `MM/YY` field.
    ///
    /// # Example
    ///
    /// ```
    /// use card_field::CardValidator;
    ///
    /// let validator = CardValidator::default();
    /// let card = validator.validate_form("4111 1111 1111 1111", "12/40", "123").unwrap();
    /// assert_eq!(card.last_four(), "1111");
    /// ```
    pub fn validate_form(
        &self,
        pan_field: &str,
        expiry_field: &str,
        csc_field: &str,
    ) -> Result<ValidatedCard, FieldError> {
        self.validate_form_at(pan_field, expiry_field, csc_field, Utc::now())
    }

    /// Like [`validate_form`](Self::validate_form), at `now`.
    pub fn validate_form_at(
        &self,
        pan_field: &str,
        expiry_field: &str,
        csc_field: &str,
        now: DateTime<Utc>,
    ) -> Result<ValidatedCard, FieldError> {
        let pan = strip_formatting(pan_field);

        // A malformed `MM/YY` is passed on whole as the month, which the
        // expiry validator rejects after the number has been checked.
        let (month, year) = split_expiry(expiry_field).unwrap_or((expiry_field, ""));

        self.validate_at(&RawCard::new(&pan, month, year, csc_field), now)
    }

    /// Detects networks of a (partial) number among the configured ones.
    #[inline]
    pub fn detect_networks(&self, number: &str) -> Vec<PaymentNetwork> {
        detect_networks_in(number, &self.config.networks)
    }

    /// A message adapter in the configured locale.
    #[inline]
    pub fn messages(&self) -> MessageAdapter {
        MessageAdapter::new(self.config.locale).with_networks(self.config.networks.clone())
    }
}
