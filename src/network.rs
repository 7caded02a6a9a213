//! Payment network classification by BIN prefix.
//!
//! Classification walks [`BIN_TABLE`] top to bottom and keeps every rule whose
//! prefix range contains the leading digits of the card number. A number can
//! match several rules (co-badged BINs); callers treat the first match as the
//! authoritative network for formatting and length checks.
//!
//! # Rule order
//!
//! Order in [`BIN_TABLE`] is part of its meaning. Narrow exceptions must sit
//! above the broad rule they carve out of, e.g. the Mir-on-UnionPay BIN
//! `629157` comes before UnionPay `62`, and the Visa Electron BINs come before
//! plain Visa `4`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Card schemes known to the classifier.
///
/// `UzCard`, `Humo` and `Troy` are reserved: they have no BIN rule and are not
/// part of [`ACCEPTED_NETWORKS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaymentNetwork {
    /// Mastercard - 2221-2720, 51-55
    Mastercard,
    /// Visa Electron - 4026, 417500, 4508, 4844, 4913, 4917
    Electron,
    /// Visa - 4
    Visa,
    /// Maestro - 5018, 5020, 5038, 5893, 6304, 6759, 6761-6763, 676770, 676774
    Maestro,
    /// Mir - 2200-2204 and the co-badged 629157
    Mir,
    /// American Express - 34, 37
    #[cfg_attr(feature = "serde", serde(rename = "amex"))]
    AmericanExpress,
    /// Diners Club - 36, 54
    DinersClub,
    /// Discover - 6011, 622126-622925, 644-649, 65
    Discover,
    /// JCB - 3528-3589
    Jcb,
    /// UnionPay - 62
    UnionPay,
    /// UzCard (reserved)
    UzCard,
    /// Humo (reserved)
    Humo,
    /// Troy (reserved)
    Troy,
}

impl PaymentNetwork {
    /// Every network tag, reserved ones included.
    pub const ALL: [PaymentNetwork; 13] = [
        Self::Mastercard,
        Self::Electron,
        Self::Visa,
        Self::Maestro,
        Self::Mir,
        Self::AmericanExpress,
        Self::DinersClub,
        Self::Discover,
        Self::Jcb,
        Self::UnionPay,
        Self::UzCard,
        Self::Humo,
        Self::Troy,
    ];

    /// Human-readable network name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mastercard => "Mastercard",
            Self::Electron => "Visa Electron",
            Self::Visa => "Visa",
            Self::Maestro => "Maestro",
            Self::Mir => "Mir",
            Self::AmericanExpress => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
            Self::UzCard => "UzCard",
            Self::Humo => "Humo",
            Self::Troy => "Troy",
        }
    }

    /// Short lowercase identifier, suitable for icon names and configuration.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Mastercard => "mastercard",
            Self::Electron => "electron",
            Self::Visa => "visa",
            Self::Maestro => "maestro",
            Self::Mir => "mir",
            Self::AmericanExpress => "amex",
            Self::DinersClub => "dinersclub",
            Self::Discover => "discover",
            Self::Jcb => "jcb",
            Self::UnionPay => "unionpay",
            Self::UzCard => "uzcard",
            Self::Humo => "humo",
            Self::Troy => "troy",
        }
    }

    /// The profile registered for this network, if any.
    ///
    /// Networks without a dedicated profile use [`DEFAULT_PROFILE`]; see
    /// [`profile_for`].
    pub const fn profile(&self) -> Option<&'static NetworkProfile> {
        match self {
            Self::AmericanExpress => Some(&AMEX_PROFILE),
            Self::Mir | Self::UnionPay | Self::Discover | Self::Jcb => Some(&EXTENDED_PROFILE),
            Self::Visa => Some(&VISA_PROFILE),
            Self::Maestro => Some(&MAESTRO_PROFILE),
            Self::DinersClub => Some(&DINERS_PROFILE),
            Self::Mastercard | Self::Electron | Self::UzCard | Self::Humo | Self::Troy => None,
        }
    }
}

impl fmt::Display for PaymentNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown network slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNetwork(pub String);

impl fmt::Display for UnknownNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown payment network '{}'", self.0)
    }
}

impl std::error::Error for UnknownNetwork {}

impl FromStr for PaymentNetwork {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|network| network.slug() == wanted)
            .ok_or_else(|| UnknownNetwork(s.to_string()))
    }
}

/// Per-network metadata used for length checks and input masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    /// Card number lengths the network issues.
    pub accepted_lengths: &'static [u8],
    /// Display mask; [`MASK_PLACEHOLDER`] marks a digit, anything else is literal.
    pub display_mask: &'static str,
}

impl NetworkProfile {
    /// Returns true if a number of `length` digits is accepted.
    #[inline]
    pub fn accepts_length(&self, length: usize) -> bool {
        self.accepted_lengths.iter().any(|&l| l as usize == length)
    }

    /// Longest accepted length, used to cap live input.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.accepted_lengths.iter().copied().max().unwrap_or(0) as usize
    }
}

/// Digit placeholder in display masks.
pub const MASK_PLACEHOLDER: char = '0';

/// Profile for unclassified input and networks without their own profile.
pub const DEFAULT_PROFILE: NetworkProfile = NetworkProfile {
    accepted_lengths: &[16],
    display_mask: "0000 0000 0000 0000",
};

const EXTENDED_PROFILE: NetworkProfile = NetworkProfile {
    accepted_lengths: &[16, 17, 18, 19],
    display_mask: "0000 0000 0000 0000000",
};

const AMEX_PROFILE: NetworkProfile = NetworkProfile {
    accepted_lengths: &[15],
    display_mask: "0000 000000 00000",
};

const VISA_PROFILE: NetworkProfile = NetworkProfile {
    accepted_lengths: &[13, 16],
    display_mask: "0000 0000 0000 0000",
};

const MAESTRO_PROFILE: NetworkProfile = NetworkProfile {
    accepted_lengths: &[12, 13, 14, 15, 16, 17, 18, 19],
    display_mask: "0000 0000 0000 0000 000",
};

const DINERS_PROFILE: NetworkProfile = NetworkProfile {
    accepted_lengths: &[14, 15, 16, 17, 18, 19],
    display_mask: "0000 0000 0000 0000 000",
};

/// Returns the profile for `network`, or [`DEFAULT_PROFILE`] when no network
/// is given or none is registered for it.
///
/// # Example
///
/// ```
/// use card_field::network::{profile_for, PaymentNetwork, DEFAULT_PROFILE};
///
/// assert_eq!(profile_for(Some(PaymentNetwork::AmericanExpress)).accepted_lengths, &[15]);
/// assert_eq!(profile_for(None), &DEFAULT_PROFILE);
/// assert_eq!(profile_for(Some(PaymentNetwork::Mastercard)), &DEFAULT_PROFILE);
/// ```
#[inline]
pub fn profile_for(network: Option<PaymentNetwork>) -> &'static NetworkProfile {
    network
        .and_then(|n| n.profile())
        .unwrap_or(&DEFAULT_PROFILE)
}

/// A prefix rule: the leading digits, read with the same width as `start`,
/// must fall in `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinRule {
    /// Network the rule classifies as.
    pub network: PaymentNetwork,
    /// First prefix of the range.
    pub start: u32,
    /// Last prefix of the range (equal to `start` for single-prefix rules).
    pub end: u32,
}

impl BinRule {
    /// A rule covering a range of prefixes of equal width.
    pub const fn range(network: PaymentNetwork, start: u32, end: u32) -> Self {
        Self {
            network,
            start,
            end,
        }
    }

    /// A rule naming a single prefix.
    pub const fn prefix(network: PaymentNetwork, start: u32) -> Self {
        Self::range(network, start, start)
    }

    /// Number of leading digits the rule inspects.
    pub const fn width(&self) -> usize {
        let mut n = self.start;
        let mut width = 1;
        while n >= 10 {
            n /= 10;
            width += 1;
        }
        width
    }

    /// Returns true if the leading digits of `number` fall in the rule's range.
    ///
    /// Only the digit run at the start of the first [`width`](Self::width)
    /// characters is read, so partial input shorter than the prefix is
    /// compared as the smaller number it is.
    pub fn matches(&self, number: &str) -> bool {
        let mut leading: Option<u32> = None;
        for c in number.chars().take(self.width()) {
            match c.to_digit(10) {
                Some(d) => leading = Some(leading.unwrap_or(0) * 10 + d),
                None => break,
            }
        }

        matches!(leading, Some(n) if n >= self.start && n <= self.end)
    }
}

use PaymentNetwork::*;

/// Classification rules in priority order.
pub const BIN_TABLE: &[BinRule] = &[
    BinRule::range(Mir, 2200, 2204),
    BinRule::range(Mastercard, 2221, 2720),
    BinRule::range(Jcb, 3528, 3589),
    BinRule::prefix(AmericanExpress, 34),
    BinRule::prefix(AmericanExpress, 37),
    BinRule::prefix(DinersClub, 36),
    BinRule::prefix(Electron, 417500),
    BinRule::prefix(Electron, 4026),
    BinRule::prefix(Electron, 4508),
    BinRule::prefix(Electron, 4844),
    BinRule::prefix(Electron, 4913),
    BinRule::prefix(Electron, 4917),
    BinRule::prefix(Visa, 4),
    BinRule::prefix(Maestro, 5018),
    BinRule::prefix(Maestro, 5020),
    BinRule::prefix(Maestro, 5038),
    BinRule::prefix(Maestro, 5893),
    BinRule::prefix(DinersClub, 54),
    BinRule::range(Mastercard, 51, 55),
    BinRule::range(Discover, 622126, 622925),
    BinRule::prefix(Discover, 6011),
    BinRule::prefix(Maestro, 6304),
    BinRule::prefix(Maestro, 6759),
    BinRule::prefix(Maestro, 6761),
    BinRule::prefix(Maestro, 6762),
    BinRule::prefix(Maestro, 6763),
    BinRule::prefix(Maestro, 676770),
    BinRule::prefix(Maestro, 676774),
    BinRule::range(Discover, 644, 649),
    BinRule::prefix(Discover, 65),
    // Mir co-badged on UnionPay; must precede the UnionPay rule.
    BinRule::prefix(Mir, 629157),
    BinRule::prefix(UnionPay, 62),
];

/// Networks accepted by default.
pub const ACCEPTED_NETWORKS: &[PaymentNetwork] = &[
    Mastercard,
    Electron,
    Visa,
    Maestro,
    Mir,
    AmericanExpress,
    DinersClub,
    Discover,
    Jcb,
    UnionPay,
];

/// Returns true if `network` is in [`ACCEPTED_NETWORKS`].
#[inline]
pub fn is_accepted(network: PaymentNetwork) -> bool {
    ACCEPTED_NETWORKS.contains(&network)
}

/// Detects the networks of a (possibly partial) card number among
/// [`ACCEPTED_NETWORKS`], in table order.
///
/// # Example
///
/// ```
/// use card_field::network::{detect_networks, PaymentNetwork};
///
/// assert_eq!(detect_networks("4111")[0], PaymentNetwork::Visa);
/// assert!(detect_networks("629157").contains(&PaymentNetwork::Mir));
/// assert!(detect_networks("").is_empty());
/// ```
pub fn detect_networks(number: &str) -> Vec<PaymentNetwork> {
    detect_networks_in(number, ACCEPTED_NETWORKS)
}

/// Detects the networks of a card number, keeping only those in `allowed`.
///
/// An empty `allowed` slice places no restriction.
pub fn detect_networks_in(number: &str, allowed: &[PaymentNetwork]) -> Vec<PaymentNetwork> {
    if number.is_empty() {
        return Vec::new();
    }

    let networks: Vec<PaymentNetwork> = BIN_TABLE
        .iter()
        .filter(|rule| allowed.is_empty() || allowed.contains(&rule.network))
        .filter(|rule| rule.matches(number))
        .map(|rule| rule.network)
        .collect();

    tracing::trace!(matches = networks.len(), "classified card prefix");
    networks
}

/// The best guess network for live feedback: the first detected one.
#[inline]
pub fn detect_network(number: &str) -> Option<PaymentNetwork> {
    detect_networks(number).first().copied()
}
