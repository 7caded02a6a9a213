//! Fuzz target for whole-card validation.
//!
//! Tests that validation never panics and that successes hold their invariants.

#![no_main]

use arbitrary::Arbitrary;
use card_field::{luhn, validate, CardValidator, RawCard};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    pan: &'a str,
    month: &'a str,
    year: &'a str,
    csc: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let raw = RawCard::new(input.pan, input.month, input.year, input.csc);

    if let Ok(card) = validate(&raw) {
        assert!(luhn::luhn_check(card.pan().as_str()), "validated number must pass Luhn");
        assert_eq!(card.pan().as_str(), input.pan);
        assert!(!format!("{:?}", card).contains(input.pan));
    }

    // The form path strips formatting first; it must never panic either
    let expiry = format!("{}/{}", input.month, input.year);
    let _ = CardValidator::default().validate_form(input.pan, &expiry, input.csc);
});
