//! Fuzz target for formatting and masking.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use arbitrary::Arbitrary;
use card_field::{format, mask_pan, PaymentNetwork};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    pan: &'a str,
    mask: &'a str,
    placeholder: char,
}

fuzz_target!(|input: Input<'_>| {
    // These should never panic
    let _ = format::format_pan(input.pan, input.mask, input.placeholder);
    let _ = format::preview(input.pan);
    let _ = mask_pan(input.pan);

    for network in PaymentNetwork::ALL {
        let _ = format::format_for_network(input.pan, Some(network));
    }

    // Formatting only ever drops digits from the end
    let digits = format::strip_formatting(input.pan);
    let formatted = format::format_for_network(&digits, None);
    assert!(digits.starts_with(&format::strip_formatting(&formatted)));

    if let Some(masked) = mask_pan(input.pan) {
        assert_eq!(masked.len(), input.pan.len());
        assert_eq!(mask_pan(&masked).is_some(), masked.len() == 10);
    }
});
