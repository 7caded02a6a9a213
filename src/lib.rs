//! # card_field
//!
//! Validation engine for a payment card input form.
//!
//! ## Features
//!
//! - Luhn checksum
//! - Payment network classification from an ordered BIN prefix table
//! - Card number, expiry and security code validators with a fixed,
//!   localizable failure vocabulary
//! - Single-line text encoding of a validated card
//! - Display masking and input-mask formatting for live typing feedback
//! - One display message per form field
//!
//! ## Quick Start
//!
//! ```rust
//! use card_field::{validate, ErrorReason, Field, PaymentNetwork, RawCard};
//!
//! let card = validate(&RawCard::new("4111111111111111", "12", "40", "123")).unwrap();
//! assert_eq!(card.network(), PaymentNetwork::Visa);
//! assert_eq!(card.masked_pan(), "411111******1111");
//!
//! // Safe for logging: never shows the full number or the security code
//! println!("{}", card); // "Visa 411111******1111 12/40"
//!
//! // The first failing field is reported
//! let err = validate(&RawCard::new("4111111111111111", "13", "40", "123")).unwrap_err();
//! assert_eq!(err.field, Field::Expiry);
//! assert_eq!(err.reason, ErrorReason::OnlyDigitsAllowed);
//! ```
//!
//! ## Network Detection
//!
//! ```rust
//! use card_field::network::{detect_networks, profile_for};
//! use card_field::PaymentNetwork;
//!
//! assert_eq!(detect_networks("2200"), vec![PaymentNetwork::Mir]);
//!
//! // Mir co-badged on UnionPay: Mir comes first
//! assert_eq!(
//!     detect_networks("6291570000000007"),
//!     vec![PaymentNetwork::Mir, PaymentNetwork::UnionPay]
//! );
//!
//! let amex = profile_for(Some(PaymentNetwork::AmericanExpress));
//! assert_eq!(amex.accepted_lengths, &[15]);
//! assert_eq!(amex.display_mask, "0000 000000 00000");
//! ```
//!
//! ## Form Input
//!
//! ```rust
//! use card_field::{format, CardValidator, Locale, ValidatorConfig};
//!
//! // Live formatting while typing
//! let preview = format::preview("3782822");
//! assert_eq!(preview.formatted, "3782 822");
//! assert_eq!(preview.max_length, 15);
//!
//! // Per-field messages
//! let validator = CardValidator::new(ValidatorConfig::default().with_locale(Locale::Ru));
//! let messages = validator.messages();
//! assert_eq!(messages.csc("12"), "Поле может содержать только цифры");
//!
//! // Submit
//! let card = validator.validate_form("3782 822463 10005", "11/39", "1234").unwrap();
//! assert_eq!(card.formatted_pan(), "3782 822463 10005");
//! ```
//!
//! ## Text Encoding
//!
//! ```rust
//! use card_field::{codec, validate, RawCard};
//!
//! let card = validate(&RawCard::new("5500000000000004", "3", "41", "321")).unwrap();
//! let text = codec::to_text(&card);
//! assert_eq!(text, "5500000000000004,03/41,321");
//! assert_eq!(codec::from_text(&text).unwrap(), card);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for networks, locales and configuration |
//! | `config-json` | `ValidatorConfig::from_json` |
//! | `generate` | Random test card generation |
//! | `wasm` | WebAssembly bindings for the browser form |
//!
//! ## Security
//!
//! - Card numbers and security codes are zeroized on drop
//! - `Debug` and `Display` show masked values only
//! - Equality of sensitive values is constant-time
//! - Log events carry the masked number at most
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod codec;
pub mod config;
pub mod csc;
pub mod error;
pub mod expiry;
pub mod format;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod message;
pub mod network;
pub mod pan;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{RawCard, ValidatedCard};
pub use config::{ConfigError, ValidatorConfig};
pub use error::{ErrorReason, Field, FieldError, LocalizedError, Locale};
pub use message::MessageAdapter;
pub use network::{NetworkProfile, PaymentNetwork};
pub use validate::{is_valid, validate, validate_at, CardValidator};

pub use luhn::luhn_check;
pub use mask::{constant_time_eq, constant_time_eq_str, mask_pan};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    const VISA_16: &str = "4111111111111111";
    const VISA_13: &str = "4222222222222";
    const MASTERCARD: &str = "5500000000000004";
    const MASTERCARD_2: &str = "5105105105105100";
    const AMEX: &str = "378282246310005";
    const DISCOVER: &str = "6011111111111117";
    const JCB: &str = "3530111333300000";
    const MIR: &str = "2200000000000004";
    const UNIONPAY: &str = "6200000000000005";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn check(pan: &str) -> Result<ValidatedCard, FieldError> {
        validate_at(&RawCard::new(pan, "12", "30", "123"), now())
    }

    #[test]
    fn test_networks() {
        let cases = [
            (VISA_16, PaymentNetwork::Visa),
            (VISA_13, PaymentNetwork::Visa),
            (MASTERCARD, PaymentNetwork::Mastercard),
            (MASTERCARD_2, PaymentNetwork::Mastercard),
            (AMEX, PaymentNetwork::AmericanExpress),
            (DISCOVER, PaymentNetwork::Discover),
            (JCB, PaymentNetwork::Jcb),
            (MIR, PaymentNetwork::Mir),
            (UNIONPAY, PaymentNetwork::UnionPay),
        ];

        for (pan, network) in cases {
            let card = check(pan).unwrap_or_else(|e| panic!("{}: {}", pan, e));
            assert_eq!(card.network(), network, "{}", pan);
            assert_eq!(card.pan().len(), pan.len());
        }
    }

    #[test]
    fn test_invalid_checksum() {
        let err = check("4111111111111112").unwrap_err();
        assert_eq!(err, FieldError::new(Field::Pan, ErrorReason::InvalidNumber));
    }

    #[test]
    fn test_formatted_pan_rejected() {
        let err = check("4111-1111-1111-1111").unwrap_err();
        assert_eq!(err.reason, ErrorReason::OnlyDigitsAllowed);
    }

    #[test]
    fn test_too_short_to_classify() {
        assert_eq!(check("41111").unwrap_err().reason, ErrorReason::IncompleteNumber);
        assert_eq!(check("").unwrap_err().reason, ErrorReason::OnlyDigitsAllowed);
    }

    #[test]
    fn test_wrong_length_for_network() {
        assert_eq!(
            check("3400000000000000").unwrap_err().reason,
            ErrorReason::IncompleteNumber
        );
        assert!(check("340000000000009").is_ok());
    }

    #[test]
    fn test_unsupported_network() {
        assert_eq!(
            check("9999999999999995").unwrap_err().reason,
            ErrorReason::UnsupportedNetwork
        );
    }

    #[test]
    fn test_masking() {
        assert_eq!(mask_pan(VISA_16).as_deref(), Some("411111******1111"));
        assert_eq!(check(AMEX).unwrap().masked_pan(), "378282*****0005");
    }

    #[test]
    fn test_luhn() {
        assert!(luhn_check(VISA_16));
        assert!(!luhn_check("4111111111111112"));
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatedCard>();
        assert_send_sync::<FieldError>();
        assert_send_sync::<PaymentNetwork>();
        assert_send_sync::<CardValidator>();
        assert_send_sync::<MessageAdapter>();
    }
}
