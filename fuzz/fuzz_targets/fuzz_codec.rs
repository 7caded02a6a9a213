//! Fuzz target for the text codec.
//!
//! Tests that decoding never panics and that decoded cards re-encode to the
//! same line.

#![no_main]

use card_field::codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(card) = codec::from_text(data) {
        let text = codec::to_text(&card);
        let again = codec::from_text(&text).expect("re-encoded card must decode");
        assert_eq!(again, card);
    }
});
