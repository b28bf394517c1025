//! # Relay Configuration
//!
//! Relay strategy selection for peers that cannot accept inbound connections
//! (behind symmetric NAT, or a mobile device without a stable socket).
//!
//! This crate provides:
//! - [`RelayConfiguration`], a selector between mutually exclusive relay
//!   strategies plus the tunables that apply to the chosen strategy
//! - [`PushCredentials`] for push-notification wake-up of mobile devices
//! - A TOML file model for operator-supplied configuration
//!
//! Relaying itself, push delivery and peer map propagation are performed by
//! other components; they read the values configured here.
//!
//! ## Example
//!
//! ```rust
//! use relay_config::{RelayConfiguration, RelayKind};
//! use std::time::Duration;
//!
//! let mut config = RelayConfiguration::plain();
//! config.set_peer_map_update_interval_secs(30)?;
//!
//! assert_eq!(config.kind(), RelayKind::PlainRelay);
//! assert_eq!(config.peer_map_update_interval(), Duration::from_secs(30));
//! assert!(config.push_credentials().is_none());
//! # Ok::<(), relay_config::RelayConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod credentials;
pub mod error;
pub mod file;
pub mod strategy;

// Re-export commonly used types
pub use config::{
    PLAIN_PEER_MAP_UPDATE_INTERVAL_SECS, PUSH_PEER_MAP_UPDATE_INTERVAL_SECS, PUSH_SEND_RETRIES,
    PushDelivery, RelayConfiguration,
};
pub use credentials::PushCredentials;
pub use error::{RelayConfigError, Result};
pub use file::{PushCredentialsFile, RelayConfigFile};
pub use strategy::{RelayKind, RelayStrategy};
