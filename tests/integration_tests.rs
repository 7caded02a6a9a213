//! Integration tests for card_field.
//!
//! These cover real test card numbers, the BIN table's priority rules, the
//! expiry window, the text codec, per-field messages, and what reaches logs.

use std::io;
use std::sync::{Arc, Mutex};

use card_field::{
    codec, format, luhn_check, mask_pan,
    network::{detect_networks, detect_networks_in, profile_for},
    validate_at, CardValidator, ErrorReason, Field, FieldError, Locale, PaymentNetwork, RawCard,
    ValidatedCard, ValidatorConfig,
};
use chrono::{DateTime, TimeZone, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
}

fn check(pan: &str) -> Result<ValidatedCard, FieldError> {
    validate_at(&RawCard::new(pan, "12", "30", "123"), now())
}

// =============================================================================
// REAL-WORLD TEST CARD NUMBERS
// =============================================================================
// Published processor test numbers. They pass Luhn but are not real cards.

mod test_cards {
    pub const VISA: [&str; 5] = [
        "4111111111111111",
        "4012888888881881",
        "4222222222222",
        "4000056655665556",
        "4242424242424242",
    ];

    pub const MASTERCARD: [&str; 5] = [
        "5555555555554444",
        "5105105105105100",
        "5200828282828210",
        "2223000048400011",
        "2223520043560014",
    ];

    pub const AMEX: [&str; 3] = ["378282246310005", "371449635398431", "340000000000009"];

    pub const DISCOVER: [&str; 3] = ["6011111111111117", "6011000990139424", "6445644564456445"];

    pub const JCB: [&str; 2] = ["3530111333300000", "3566002020360505"];

    pub const MIR: [&str; 2] = ["2200000000000004", "2201382000000013"];

    pub const MAESTRO: [&str; 3] = ["6759649826438453", "6763318282526706", "501800000009"];

    pub const UNIONPAY: [&str; 2] = ["6250941006528599", "6200000000000005"];

    pub const ELECTRON: [&str; 2] = ["4917300800000000", "4175000000000001"];

    pub const DINERS: [&str; 1] = ["36700102000000"];
}

// =============================================================================
// VALID CARDS
// =============================================================================

#[test]
fn test_all_test_cards_validate() {
    let groups: [(&[&str], PaymentNetwork); 10] = [
        (&test_cards::VISA, PaymentNetwork::Visa),
        (&test_cards::MASTERCARD, PaymentNetwork::Mastercard),
        (&test_cards::AMEX, PaymentNetwork::AmericanExpress),
        (&test_cards::DISCOVER, PaymentNetwork::Discover),
        (&test_cards::JCB, PaymentNetwork::Jcb),
        (&test_cards::MIR, PaymentNetwork::Mir),
        (&test_cards::MAESTRO, PaymentNetwork::Maestro),
        (&test_cards::UNIONPAY, PaymentNetwork::UnionPay),
        (&test_cards::ELECTRON, PaymentNetwork::Electron),
        (&test_cards::DINERS, PaymentNetwork::DinersClub),
    ];

    for (cards, network) in groups {
        for &pan in cards {
            let result = check(pan);
            assert!(result.is_ok(), "{} should be valid: {:?}", pan, result);
            assert_eq!(result.unwrap().network(), network, "{}", pan);
        }
    }
}

// =============================================================================
// BIN TABLE PRIORITY
// =============================================================================

#[test]
fn test_mir_precedes_unionpay() {
    assert_eq!(
        detect_networks("6291570000000007"),
        vec![PaymentNetwork::Mir, PaymentNetwork::UnionPay]
    );
    assert_eq!(check("6291570000000007").unwrap().network(), PaymentNetwork::Mir);
}

#[test]
fn test_discover_range_precedes_unionpay() {
    assert_eq!(
        detect_networks("6221260000000000"),
        vec![PaymentNetwork::Discover, PaymentNetwork::UnionPay]
    );
    assert_eq!(detect_networks("622925")[0], PaymentNetwork::Discover);
    assert_eq!(detect_networks("622927"), vec![PaymentNetwork::UnionPay]);
}

#[test]
fn test_electron_precedes_visa() {
    assert_eq!(
        detect_networks("4026000000000002"),
        vec![PaymentNetwork::Electron, PaymentNetwork::Visa]
    );
}

#[test]
fn test_prefix_54_is_diners_first() {
    // Mastercard 51-55 overlaps the Diners Club 54 rule, which comes first.
    assert_eq!(
        detect_networks("5454545454545454"),
        vec![PaymentNetwork::DinersClub, PaymentNetwork::Mastercard]
    );
    assert_eq!(check("5431111111111111").unwrap().network(), PaymentNetwork::DinersClub);
}

#[test]
fn test_first_network_decides_length() {
    // 15 digits is a valid Diners Club length but not a Mastercard one; the
    // first detected network wins.
    let pan = "543111111111113";
    assert_eq!(detect_networks(pan)[0], PaymentNetwork::DinersClub);
    assert!(profile_for(Some(PaymentNetwork::DinersClub)).accepts_length(15));
}

#[test]
fn test_restricted_networks_skip_rules() {
    let only_mastercard = [PaymentNetwork::Mastercard];
    assert_eq!(
        detect_networks_in("5454545454545454", &only_mastercard),
        vec![PaymentNetwork::Mastercard]
    );

    let validator = CardValidator::new(ValidatorConfig::default().with_networks(only_mastercard));
    let card = validator
        .validate_at(&RawCard::new("5431111111111111", "12", "30", "123"), now())
        .unwrap();
    assert_eq!(card.network(), PaymentNetwork::Mastercard);
}

#[test]
fn test_unaccepted_networks_are_unsupported() {
    for pan in ["8600000000000000", "9860000000000000", "9792000000000000"] {
        assert!(detect_networks(pan).is_empty());
        assert_eq!(check(pan).unwrap_err().reason, ErrorReason::UnsupportedNetwork);
    }
}

// =============================================================================
// INVALID CARDS
// =============================================================================

#[test]
fn test_pan_failures() {
    let cases = [
        ("", ErrorReason::OnlyDigitsAllowed),
        ("4111 1111 1111 1111", ErrorReason::OnlyDigitsAllowed),
        ("4111111111111111\n", ErrorReason::OnlyDigitsAllowed),
        ("411111", ErrorReason::IncompleteNumber),
        ("41111", ErrorReason::IncompleteNumber),
        ("411111111111111", ErrorReason::IncompleteNumber),
        ("41111111111111111111", ErrorReason::IncompleteNumber),
        ("4111111111111112", ErrorReason::InvalidNumber),
        ("1111111111111117", ErrorReason::UnsupportedNetwork),
    ];

    for (pan, reason) in cases {
        assert_eq!(
            check(pan).unwrap_err(),
            FieldError::new(Field::Pan, reason),
            "input {:?}",
            pan
        );
    }
}

#[test]
fn test_amex_length_coupling() {
    assert_eq!(
        check("3400000000000000").unwrap_err().reason,
        ErrorReason::IncompleteNumber
    );
    assert!(check("340000000000009").is_ok());
}

#[test]
fn test_single_digit_typos_are_caught() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let cards = test_cards::VISA
        .iter()
        .chain(&test_cards::MASTERCARD)
        .chain(&test_cards::AMEX)
        .chain(&test_cards::MIR)
        .chain(&test_cards::MAESTRO);

    for &pan in cards {
        for _ in 0..50 {
            let mut digits = pan.as_bytes().to_vec();
            let pos = rng.gen_range(0..digits.len());
            let shift: u8 = rng.gen_range(1..10);
            digits[pos] = b'0' + (digits[pos] - b'0' + shift) % 10;
            let typo = String::from_utf8(digits).unwrap();

            assert!(!luhn_check(&typo), "{} -> {}", pan, typo);
            assert!(check(&typo).is_err(), "{} -> {}", pan, typo);
        }
    }
}

// =============================================================================
// EXPIRY
// =============================================================================

#[test]
fn test_expiry_last_and_next_month() {
    let pan = "4111111111111111";
    let last = validate_at(&RawCard::new(pan, "09", "26", "123"), now()).unwrap_err();
    assert_eq!(last, FieldError::new(Field::Expiry, ErrorReason::CardExpired));

    assert!(validate_at(&RawCard::new(pan, "10", "26", "123"), now()).is_ok());
    assert!(validate_at(&RawCard::new(pan, "11", "26", "123"), now()).is_ok());
}

#[test]
fn test_expiry_boundary_is_first_of_next_month_utc() {
    let raw = RawCard::new("4111111111111111", "10", "26", "123");
    let just_before = Utc.with_ymd_and_hms(2026, 10, 31, 23, 59, 59).unwrap();
    let boundary = Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap();
    let just_after = Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 1).unwrap();

    assert!(validate_at(&raw, just_before).is_ok());
    assert!(validate_at(&raw, boundary).is_ok());
    assert_eq!(
        validate_at(&raw, just_after).unwrap_err().reason,
        ErrorReason::CardExpired
    );
}

#[test]
fn test_sliding_window() {
    let pan = "4111111111111111";
    let card = validate_at(&RawCard::new(pan, "01", "55", "123"), now()).unwrap();
    assert_eq!(card.expiry().full_year(), 2055);

    // 2056 would be 30 years out; "56" is read as 1956.
    let err = validate_at(&RawCard::new(pan, "01", "56", "123"), now()).unwrap_err();
    assert_eq!(err.reason, ErrorReason::CardExpired);
}

#[test]
fn test_expiry_format_errors() {
    let pan = "4111111111111111";
    for (month, year) in [("0", "30"), ("13", "30"), ("001", "30"), ("1", "3"), ("1", "2030"), ("ab", "30")] {
        let err = validate_at(&RawCard::new(pan, month, year, "123"), now()).unwrap_err();
        assert_eq!(
            err,
            FieldError::new(Field::Expiry, ErrorReason::OnlyDigitsAllowed),
            "{}/{}",
            month,
            year
        );
    }
}

// =============================================================================
// FORM SUBMISSION
// =============================================================================

#[test]
fn test_form_submission() {
    let validator = CardValidator::default();

    let card = validator
        .validate_form_at("5500 0000 0000 0004", "12/30", "999", now())
        .unwrap();
    assert_eq!(card.to_string(), "Mastercard 550000******0004 12/30");

    let err = validator
        .validate_form_at("5500 0000 0000 0004", "12/30", "9", now())
        .unwrap_err();
    assert_eq!(err, FieldError::new(Field::Csc, ErrorReason::OnlyDigitsAllowed));

    let err = validator
        .validate_form_at("5500 0000 0000 0004", "12/30/1", "999", now())
        .unwrap_err();
    assert_eq!(err.field, Field::Expiry);
}

// =============================================================================
// TEXT CODEC
// =============================================================================

#[test]
fn test_codec_round_trip_all_networks() {
    for pan in ["4111111111111111", "378282246310005", "6291570000000007", "501800000009"] {
        let card = validate_at(&RawCard::new(pan, "5", "31", "0420"), now()).unwrap();
        let text = codec::to_text(&card);
        assert_eq!(text, format!("{},05/31,0420", pan));
        assert_eq!(codec::from_text_at(&text, now()).unwrap(), card);
    }
}

#[test]
fn test_codec_decoding_uses_validator_config() {
    let validator = CardValidator::new(ValidatorConfig::default().with_networks([PaymentNetwork::Mir]));
    let err = codec::from_text_with(&validator, "4111111111111111,12/30,123", now()).unwrap_err();
    assert_eq!(err, FieldError::new(Field::Pan, ErrorReason::UnsupportedNetwork));
}

// =============================================================================
// MESSAGES
// =============================================================================

#[test]
fn test_message_per_field() {
    let validator = CardValidator::new(ValidatorConfig::default().with_locale(Locale::En));
    let messages = validator.messages();

    assert_eq!(messages.pan("4111111111111111"), "");
    assert_eq!(messages.pan("41111"), "Incomplete card number");
    assert_eq!(messages.pan("1111111111111117"), "Card is not supported");
    assert_eq!(messages.expiry_at("09/26", now()), "Card has expired");
    assert_eq!(messages.csc("12345"), "Only digits are allowed");
}

#[test]
fn test_messages_follow_configured_networks() {
    let validator =
        CardValidator::new(ValidatorConfig::default().with_networks([PaymentNetwork::Visa]));
    assert_eq!(validator.messages().pan("5500000000000004"), "Card is not supported");
}

#[test]
fn test_russian_messages() {
    let messages = CardValidator::new(ValidatorConfig::default().with_locale(Locale::Ru)).messages();
    assert_eq!(messages.pan("41111"), "Неполный номер карты");
    assert_eq!(messages.pan("1111111111111117"), "Карта не поддерживается");
}

// =============================================================================
// DISPLAY AND SECURITY
// =============================================================================

#[test]
fn test_masking_and_formatting() {
    let card = check("6291570000000007").unwrap();
    assert_eq!(card.masked_pan(), "629157******0007");
    assert_eq!(card.formatted_pan(), "6291 5700 0000 0007");

    assert_eq!(mask_pan("4111111111111111").as_deref(), Some("411111******1111"));
    assert_eq!(mask_pan("411111******1111"), None);
}

#[test]
fn test_preview_tracks_typing() {
    let steps = [
        ("3", None, "3"),
        ("37", Some(PaymentNetwork::AmericanExpress), "37"),
        ("37828", Some(PaymentNetwork::AmericanExpress), "3782 8"),
        ("3782 822463 10005", Some(PaymentNetwork::AmericanExpress), "3782 822463 10005"),
    ];

    for (input, network, formatted) in steps {
        let p = format::preview(input);
        assert_eq!(p.network, network, "{}", input);
        assert_eq!(p.formatted, formatted, "{}", input);
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_logs_never_contain_card_data() {
    let logs = capture_logs(|| {
        let _ = validate_at(&RawCard::new("4012888888881881", "12", "30", "987"), now());
        let _ = validate_at(&RawCard::new("4012888888881882", "12", "30", "987"), now());
        let _ = codec::from_text_at("4012888888881881,12/30,987", now());
    });

    assert!(logs.contains("card validated"));
    assert!(logs.contains("INVALID_NUMBER"));
    assert!(logs.contains("401288******1881"));
    assert!(!logs.contains("4012888888881881"));
    assert!(!logs.contains("4012888888881882"));
    assert!(!logs.contains("987"));
}

#[test]
fn test_form_failures_are_logged() {
    let validator = CardValidator::default();
    let logs = capture_logs(|| {
        let _ = validator.validate_form_at("4012 8888 8888 1882", "12/30", "987", now());
        let _ = validator.validate_form_at("4012 8888 8888 1881", "1230", "987", now());
    });

    assert_eq!(logs.matches("card validation failed").count(), 2);
    assert!(logs.contains("field=pan"));
    assert!(logs.contains("field=expiry"));
    assert!(logs.contains("INVALID_NUMBER"));
    assert!(logs.contains("ONLY_DIGITS_ALLOWED"));
    assert!(!logs.contains("4012888888881881"));
    assert!(!logs.contains("987"));
}

#[test]
fn test_form_success_is_logged_once() {
    let validator = CardValidator::default();
    let logs = capture_logs(|| {
        let _ = validator.validate_form_at("4012 8888 8888 1881", "12/30", "987", now());
    });

    assert_eq!(logs.matches("card validated").count(), 1);
}

#[test]
fn test_thread_safety() {
    let validator = Arc::new(CardValidator::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = Arc::clone(&validator);
            std::thread::spawn(move || {
                validator
                    .validate_at(&RawCard::new("4111111111111111", "12", "30", "123"), now())
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

// =============================================================================
// JSON CONFIGURATION
// =============================================================================

#[cfg(feature = "config-json")]
mod config_json {
    use super::*;
    use card_field::ConfigError;
    use serde_json::json;

    #[test]
    fn test_config_from_json_document() {
        let doc = json!({ "networks": ["mir", "visa"], "locale": "ru" });
        let config = ValidatorConfig::from_json(&doc.to_string()).unwrap();
        assert_eq!(config.networks, vec![PaymentNetwork::Mir, PaymentNetwork::Visa]);
        assert_eq!(config.locale, Locale::Ru);

        let validator = CardValidator::new(config);
        assert_eq!(validator.messages().pan("5500000000000004"), "Карта не поддерживается");
        assert!(validator
            .validate_at(&RawCard::new("2200000000000004", "12", "30", "123"), now())
            .is_ok());
    }

    #[test]
    fn test_config_serializes_slugs() {
        let config = ValidatorConfig::default().with_locale(Locale::Ru);
        let text = serde_json::to_string(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["locale"], "ru");
        assert!(value["networks"].as_array().unwrap().contains(&json!("amex")));
        assert_eq!(ValidatorConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_wrong_shape() {
        let doc = json!({ "networks": "visa" });
        let err = ValidatorConfig::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
