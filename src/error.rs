//! Validation failure vocabulary.
//!
//! Every failure is local to one input field and recoverable by editing that
//! field, so there is a single small set of reasons shared by all validators.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    /// Non-numeric characters present, or a malformed numeric field.
    OnlyDigitsAllowed,
    /// Too few digits to classify, or a length the detected network does not issue.
    IncompleteNumber,
    /// Right length and network, but the Luhn checksum fails.
    InvalidNumber,
    /// No accepted network's prefix rule matches.
    UnsupportedNetwork,
    /// Well-formed expiry earlier than the current moment.
    CardExpired,
}

impl ErrorReason {
    /// Stable machine-readable tag, e.g. `INCOMPLETE_NUMBER`.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::OnlyDigitsAllowed => "ONLY_DIGITS_ALLOWED",
            Self::IncompleteNumber => "INCOMPLETE_NUMBER",
            Self::InvalidNumber => "INVALID_NUMBER",
            Self::UnsupportedNetwork => "UNSUPPORTED_NETWORK",
            Self::CardExpired => "CARD_EXPIRED",
        }
    }

    /// User-facing message in the given locale.
    pub const fn message(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Self::OnlyDigitsAllowed => "Only digits are allowed",
                Self::IncompleteNumber => "Incomplete card number",
                Self::InvalidNumber => "Invalid card number, please check for typos",
                Self::UnsupportedNetwork => "Card is not supported",
                Self::CardExpired => "Card has expired",
            },
            Locale::Ru => match self {
                Self::OnlyDigitsAllowed => "Поле может содержать только цифры",
                Self::IncompleteNumber => "Неполный номер карты",
                Self::InvalidNumber => "Недопустимый номер карты. В нём допущена ошибка",
                Self::UnsupportedNetwork => "Карта не поддерживается",
                Self::CardExpired => "Срок действия карты истёк",
            },
        }
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message(Locale::En))
    }
}

impl std::error::Error for ErrorReason {}

/// Language of user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Russian.
    Ru,
}

impl Locale {
    /// Shown when a failure message carries no isolatable reason.
    pub const fn generic_message(&self) -> &'static str {
        match self {
            Self::En => "Data entered in an invalid format",
            Self::Ru => "Данные введены в неверном формате",
        }
    }
}

/// The form field a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Card number.
    Pan,
    /// Expiry month and year.
    Expiry,
    /// Security code.
    Csc,
}

impl Field {
    /// Field name used as the message prefix.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::Expiry => "expiry",
            Self::Csc => "csc",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A failure of one field in a whole-card validation.
///
/// Displays as `"<field>: <reason>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldError {
    /// The failing field.
    pub field: Field,
    /// Why it failed.
    pub reason: ErrorReason,
}

impl FieldError {
    /// Creates a field error.
    #[inline]
    pub const fn new(field: Field, reason: ErrorReason) -> Self {
        Self { field, reason }
    }

    /// Wraps the error so that it displays in `locale`.
    #[inline]
    pub const fn localized(self, locale: Locale) -> LocalizedError {
        LocalizedError {
            error: self,
            locale,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for FieldError {}

/// A [`FieldError`] rendered in a chosen locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedError {
    error: FieldError,
    locale: Locale,
}

impl LocalizedError {
    /// The underlying error.
    pub const fn error(&self) -> FieldError {
        self.error
    }
}

impl fmt::Display for LocalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.error.field,
            self.error.reason.message(self.locale)
        )
    }
}

impl std::error::Error for LocalizedError {}

/// Tags an [`ErrorReason`] result with the field it came from.
pub(crate) trait InField<T> {
    fn in_field(self, field: Field) -> Result<T, FieldError>;
}

impl<T> InField<T> for Result<T, ErrorReason> {
    #[inline]
    fn in_field(self, field: Field) -> Result<T, FieldError> {
        self.map_err(|reason| FieldError::new(field, reason))
    }
}
