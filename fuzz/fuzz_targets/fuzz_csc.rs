//! Fuzz target for security code validation.
//!
//! Tests that security code functions never panic on arbitrary input.

#![no_main]

use card_field::csc;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = csc::is_valid_csc(data);

    if let Ok(validated) = csc::validate_csc(data) {
        assert_eq!(validated.as_str(), data);
        assert_eq!(validated.length(), data.len());
        assert!(!format!("{:?}", validated).contains(data));
        assert!(!validated.to_string().contains(data));
    }
});
