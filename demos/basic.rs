//! Basic card validation example.
//!
//! Run with: `cargo run --example basic`
//! Set `RUST_LOG=card_field=debug` to see validation events.

use card_field::{
    codec, mask_pan, validate, CardValidator, ErrorReason, Locale, RawCard, ValidatorConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,card_field=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Basic Card Validation ===\n");

    // Example 1: Validate a Visa card
    let raw = RawCard::new("4111111111111111", "12", "30", "123");
    println!("Validating: {:?}", raw);

    match validate(&raw) {
        Ok(card) => {
            println!("  Valid: yes");
            println!("  Network: {}", card.network());
            println!("  Last Four: {}", card.last_four());
            println!("  BIN: {}", card.pan().bin());
            println!("  Masked: {}", card.masked_pan());
            println!("  Formatted: {}", card.formatted_pan());
            println!("  Expires: {} ({} months left)", card.expiry(), card.expiry().months_until_expiry_at(chrono::Utc::now()));
        }
        Err(e) => {
            println!("  Valid: no");
            println!("  Error: {}", e);
        }
    }
    println!();

    // Example 2: One failing field at a time
    println!("Error handling examples:");

    let error_cases = [
        (RawCard::new("", "12", "30", "123"), "Empty number"),
        (RawCard::new("41111", "12", "30", "123"), "Too short to classify"),
        (RawCard::new("3400000000000000", "12", "30", "123"), "Wrong length for Amex"),
        (RawCard::new("4111111111111112", "12", "30", "123"), "Bad checksum"),
        (RawCard::new("9111111111111111", "12", "30", "123"), "Unknown network"),
        (RawCard::new("4111111111111111", "13", "30", "123"), "Bad month"),
        (RawCard::new("4111111111111111", "01", "20", "123"), "Expired"),
        (RawCard::new("4111111111111111", "12", "30", "12"), "Short security code"),
    ];

    for (raw, description) in error_cases {
        match validate(&raw) {
            Ok(_) => println!("  {}: unexpectedly valid", description),
            Err(e) => {
                let hint = match e.reason {
                    ErrorReason::OnlyDigitsAllowed => "fix the format",
                    ErrorReason::IncompleteNumber => "keep typing",
                    ErrorReason::InvalidNumber => "check for typos",
                    ErrorReason::UnsupportedNetwork => "use another card",
                    ErrorReason::CardExpired => "use a current card",
                };
                println!("  {}: {} [{}] ({})", description, e, e.reason.code(), hint);
            }
        }
    }
    println!();

    // Example 3: A configured validator with Russian messages
    let config = ValidatorConfig::default()
        .with_network_names(["visa", "mastercard", "mir"])
        .unwrap_or_default()
        .with_locale(Locale::Ru);
    let validator = CardValidator::new(config);
    let messages = validator.messages();

    println!("Field messages (ru):");
    println!("  number 3782...: {:?}", messages.pan("378282246310005"));
    println!("  number 2200...: {:?}", messages.pan("2200000000000004"));
    println!("  expiry 01/20:   {:?}", messages.expiry("01/20"));
    println!("  code 12a:       {:?}", messages.csc("12a"));
    println!();

    // Example 4: Encoding
    if let Ok(card) = validator.validate_form("2200 0000 0000 0004", "07/31", "321") {
        let text = codec::to_text(&card);
        println!("Encoded length: {} characters", text.len());
        match codec::from_text(&text) {
            Ok(decoded) => println!("Decoded: {}", decoded),
            Err(e) => println!("Decode failed: {}", e),
        }
    }

    println!("Masked for receipts: {:?}", mask_pan("2200000000000004"));
}
