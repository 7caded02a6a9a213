//! Validator configuration.
//!
//! # JSON
//!
//! With the `config-json` feature a configuration can be loaded from JSON.
//! Missing keys fall back to the defaults:
//!
//! ```json
//! {
//!   "networks": ["visa", "mastercard", "mir"],
//!   "locale": "ru"
//! }
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Locale;
use crate::network::{PaymentNetwork, ACCEPTED_NETWORKS};

/// Settings for a [`CardValidator`](crate::CardValidator).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidatorConfig {
    /// Networks card numbers are classified among. Empty means no restriction.
    pub networks: Vec<PaymentNetwork>,
    /// Language of user-facing messages.
    pub locale: Locale,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            networks: ACCEPTED_NETWORKS.to_vec(),
            locale: Locale::default(),
        }
    }
}

impl ValidatorConfig {
    /// Replaces the accepted networks.
    pub fn with_networks(mut self, networks: impl IntoIterator<Item = PaymentNetwork>) -> Self {
        self.networks = networks.into_iter().collect();
        self
    }

    /// Replaces the accepted networks with ones named by slug, e.g. `"amex"`.
    pub fn with_network_names<S: AsRef<str>>(
        self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, ConfigError> {
        let networks = names
            .into_iter()
            .map(|name| {
                name.as_ref()
                    .parse::<PaymentNetwork>()
                    .map_err(|e| ConfigError::UnknownNetwork(e.0))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.with_networks(networks))
    }

    /// Sets the message locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// Requires the `config-json` feature.
    #[cfg(feature = "config-json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A network name did not match any known slug.
    UnknownNetwork(String),
    /// The JSON document could not be parsed.
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNetwork(name) => write!(f, "unknown payment network '{}'", name),
            Self::Json(msg) => write!(f, "invalid configuration JSON: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
