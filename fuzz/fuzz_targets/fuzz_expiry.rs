//! Fuzz target for expiry parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use card_field::expiry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = expiry::validate_expiry_text(data);

    if let Ok((month, year)) = expiry::split_expiry(data) {
        let _ = expiry::validate_expiry(month, year);

        if let Ok(exp) = expiry::parse_expiry(month, year) {
            assert!((1..=12).contains(&exp.month()));
            assert!(exp.year() <= 99);
            let _ = exp.is_expired();
            let _ = exp.expires_at();
            let _ = exp.to_string();
        }
    }
});
