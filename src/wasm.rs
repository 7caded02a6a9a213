//! WebAssembly bindings for the browser card form.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { validate_card, preview, pan_message } from 'card_field';
//!
//! await init();
//!
//! // While typing
//! const p = preview("4111 11");
//! input.value = p.formatted;       // "4111 11"
//! input.maxLength = p.max_length;  // 16 digits
//! icon.src = `/icons/${p.network}.svg`;
//!
//! // Under each input
//! panError.textContent = pan_message(input.value.replace(/\D/g, ""), "en");
//!
//! // On submit
//! const result = validate_card("4111111111111111", "12/30", "123", "en");
//! if (!result.valid) {
//!     console.log(`${result.field}: ${result.message}`);
//! }
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::card::ValidatedCard;
use crate::error::{FieldError, Locale};
use crate::network::{PaymentNetwork, MASK_PLACEHOLDER};
use crate::{CardValidator, MessageAdapter, ValidatorConfig};

fn locale(tag: &str) -> Locale {
    match tag.to_ascii_lowercase().as_str() {
        "ru" => Locale::Ru,
        _ => Locale::En,
    }
}

fn validator(tag: &str) -> CardValidator {
    CardValidator::new(ValidatorConfig::default().with_locale(locale(tag)))
}

/// Result of whole-card validation, returned to JavaScript.
#[wasm_bindgen]
pub struct CardResult {
    valid: bool,
    network: Option<String>,
    masked: Option<String>,
    field: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

#[wasm_bindgen]
impl CardResult {
    /// True if every field validated.
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Network slug, e.g. `"visa"`.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> Option<String> {
        self.network.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn masked(&self) -> Option<String> {
        self.masked.clone()
    }

    /// Failing field: `"pan"`, `"expiry"` or `"csc"`.
    #[wasm_bindgen(getter)]
    pub fn field(&self) -> Option<String> {
        self.field.clone()
    }

    /// Failure code, e.g. `"CARD_EXPIRED"`.
    #[wasm_bindgen(getter)]
    pub fn code(&self) -> Option<String> {
        self.code.clone()
    }

    /// Localized failure message.
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

impl CardResult {
    fn from_result(result: Result<ValidatedCard, FieldError>, locale: Locale) -> Self {
        match result {
            Ok(card) => Self {
                valid: true,
                network: Some(card.network().slug().to_string()),
                masked: Some(card.masked_pan()),
                field: None,
                code: None,
                message: None,
            },
            Err(e) => Self {
                valid: false,
                network: None,
                masked: None,
                field: Some(e.field.name().to_string()),
                code: Some(e.reason.code().to_string()),
                message: Some(e.reason.message(locale).to_string()),
            },
        }
    }
}

/// Validates the three form inputs. The number may carry mask formatting;
/// the expiry is `MM/YY`.
#[wasm_bindgen]
pub fn validate_card(pan: &str, expiry: &str, csc: &str, locale_tag: &str) -> CardResult {
    let validator = validator(locale_tag);
    CardResult::from_result(
        validator.validate_form(pan, expiry, csc),
        validator.config().locale,
    )
}

/// Decodes and validates a `PAN,MM/YY,CSC` line.
#[wasm_bindgen]
pub fn from_text(text: &str, locale_tag: &str) -> CardResult {
    CardResult::from_result(crate::codec::from_text(text), locale(locale_tag))
}

/// Validates the form inputs and encodes them as a `PAN,MM/YY,CSC` line.
#[wasm_bindgen]
pub fn to_text(pan: &str, expiry: &str, csc: &str) -> Result<String, JsValue> {
    CardValidator::default()
        .validate_form(pan, expiry, csc)
        .map(|card| card.to_text())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Slugs of the networks matching a (partial) number, best guess first.
#[wasm_bindgen]
pub fn detect_networks(number: &str) -> js_sys::Array {
    crate::network::detect_networks(&crate::format::strip_formatting(number))
        .into_iter()
        .map(|n| JsValue::from_str(n.slug()))
        .collect()
}

/// Input mask and lengths for a network.
#[wasm_bindgen]
pub struct ProfileResult {
    mask: String,
    max_length: usize,
    accepted_lengths: Vec<u8>,
}

#[wasm_bindgen]
impl ProfileResult {
    #[wasm_bindgen(getter)]
    pub fn mask(&self) -> String {
        self.mask.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    #[wasm_bindgen(getter)]
    pub fn accepted_lengths(&self) -> Vec<u8> {
        self.accepted_lengths.clone()
    }
}

/// Profile for a network slug; an unknown or empty slug gets the default.
#[wasm_bindgen]
pub fn profile_for(network: &str) -> ProfileResult {
    let profile = crate::network::profile_for(network.parse::<PaymentNetwork>().ok());
    ProfileResult {
        mask: profile.display_mask.to_string(),
        max_length: profile.max_length(),
        accepted_lengths: profile.accepted_lengths.to_vec(),
    }
}

/// What the number input should show while the user types.
#[wasm_bindgen]
pub struct PreviewResult {
    network: Option<String>,
    formatted: String,
    max_length: usize,
}

#[wasm_bindgen]
impl PreviewResult {
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> Option<String> {
        self.network.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn formatted(&self) -> String {
        self.formatted.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

/// Previews partial number input.
#[wasm_bindgen]
pub fn preview(raw: &str) -> PreviewResult {
    let p = crate::format::preview(raw);
    PreviewResult {
        network: p.network.map(|n| n.slug().to_string()),
        formatted: p.formatted,
        max_length: p.max_length,
    }
}

/// Lays a number out over a display mask. An empty placeholder means `"0"`.
#[wasm_bindgen]
pub fn format_pan(pan: &str, mask: &str, placeholder: &str) -> String {
    let placeholder = placeholder.chars().next().unwrap_or(MASK_PLACEHOLDER);
    crate::format::format_pan(pan, mask, placeholder)
}

/// Keeps only the digits of the input.
#[wasm_bindgen]
pub fn strip_formatting(input: &str) -> String {
    crate::format::strip_formatting(input)
}

/// Masks a digit-only number for display; `undefined` for other input.
#[wasm_bindgen]
pub fn mask_pan(pan: &str) -> Option<String> {
    crate::mask::mask_pan(pan)
}

/// Display line for the number input; empty when valid.
#[wasm_bindgen]
pub fn pan_message(pan: &str, locale_tag: &str) -> String {
    MessageAdapter::new(locale(locale_tag)).pan(pan)
}

/// Display line for the `MM/YY` input; empty when valid.
#[wasm_bindgen]
pub fn expiry_message(expiry: &str, locale_tag: &str) -> String {
    MessageAdapter::new(locale(locale_tag)).expiry(expiry)
}

/// Display line for the security code input; empty when valid.
#[wasm_bindgen]
pub fn csc_message(csc: &str, locale_tag: &str) -> String {
    MessageAdapter::new(locale(locale_tag)).csc(csc)
}

/// Generates a Luhn-valid test number for a network slug.
#[wasm_bindgen]
pub fn generate_test_card(network: &str) -> Result<String, JsValue> {
    network
        .parse::<PaymentNetwork>()
        .map(crate::generate::generate_pan_deterministic)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
