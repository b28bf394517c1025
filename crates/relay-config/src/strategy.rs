//! Relay strategy selection.

use crate::credentials::PushCredentials;
use crate::error::RelayConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relay strategy tag
///
/// The relay transport layer only needs to know which strategy to open, so
/// the tag is kept separate from the credentials carried by [`RelayStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelayKind {
    /// Held-open plain bidirectional connection to the relay
    #[serde(rename = "plain")]
    PlainRelay,
    /// Push-notification wake-up of a mobile device
    #[serde(rename = "push")]
    PushRelay,
}

impl RelayKind {
    /// Short lowercase name, as used in configuration files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlainRelay => "plain",
            Self::PushRelay => "push",
        }
    }
}

impl fmt::Display for RelayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelayKind {
    type Err = RelayConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::PlainRelay),
            "push" => Ok(Self::PushRelay),
            _ => Err(RelayConfigError::InvalidArgument(
                format!("unknown relay strategy '{s}' (expected 'plain' or 'push')").into(),
            )),
        }
    }
}

/// How an unreachable peer is relayed
///
/// Strategy-specific payload lives inside the variant, so a push relay
/// without credentials cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayStrategy {
    /// Plain relay connection, no extra payload
    PlainRelay,
    /// Push-notification relay with the credentials needed for delivery
    PushRelay(PushCredentials),
}

impl RelayStrategy {
    /// Tag of this strategy
    #[must_use]
    pub const fn kind(&self) -> RelayKind {
        match self {
            Self::PlainRelay => RelayKind::PlainRelay,
            Self::PushRelay(_) => RelayKind::PushRelay,
        }
    }

    /// Push credentials, if this is a push relay
    #[must_use]
    pub const fn push_credentials(&self) -> Option<&PushCredentials> {
        match self {
            Self::PlainRelay => None,
            Self::PushRelay(credentials) => Some(credentials),
        }
    }
}
