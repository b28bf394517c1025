//! Relay configuration for an unreachable peer
//!
//! A [`RelayConfiguration`] is created once per unreachable-peer session via
//! [`RelayConfiguration::plain`] or [`RelayConfiguration::push`], handed to the
//! relay-session routine, and may be tuned in place between relay-session
//! attempts. The strategy is fixed for the lifetime of the value.
//!
//! # Example
//!
//! ```
//! use relay_config::{PushCredentials, RelayConfiguration, RelayKind};
//!
//! let credentials = PushCredentials::new("1234567890", "device-token", "server-key")?;
//! let config = RelayConfiguration::push(credentials)
//!     .with_peer_map_update_interval_secs(90)?
//!     .with_push_send_retries(3)?;
//!
//! assert_eq!(config.kind(), RelayKind::PushRelay);
//! assert_eq!(config.peer_map_update_interval_secs(), 90);
//! assert_eq!(config.push_send_retries(), 3);
//! # Ok::<(), relay_config::RelayConfigError>(())
//! ```

use crate::credentials::PushCredentials;
use crate::error::{RelayConfigError, Result};
use crate::strategy::{RelayKind, RelayStrategy};
use std::fmt;
use std::time::Duration;

/// Default peer map update interval for a plain relay (seconds)
pub const PLAIN_PEER_MAP_UPDATE_INTERVAL_SECS: u32 = 15;

/// Default peer map update interval for a push relay (seconds)
pub const PUSH_PEER_MAP_UPDATE_INTERVAL_SECS: u32 = 60;

/// Default number of push send retries for a push relay
pub const PUSH_SEND_RETRIES: u32 = 5;

/// Relay strategy plus its strategy-scoped tunables
///
/// Mutators are not internally synchronized. Share a configuration across
/// threads behind a lock, or stop mutating it once it has been handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfiguration {
    /// Fixed at construction
    strategy: RelayStrategy,
    /// How often the peer map is shipped to the relays
    peer_map_update_interval_secs: u32,
    /// Always 0 for a plain relay
    push_send_retries: u32,
}

impl RelayConfiguration {
    /// Create a plain relay configuration
    ///
    /// Peer map update interval is 15 seconds, no push credentials, zero
    /// push send retries.
    #[must_use]
    pub fn plain() -> Self {
        let config = Self {
            strategy: RelayStrategy::PlainRelay,
            peer_map_update_interval_secs: PLAIN_PEER_MAP_UPDATE_INTERVAL_SECS,
            push_send_retries: 0,
        };
        tracing::debug!(kind = %RelayKind::PlainRelay, "created relay configuration");
        config
    }

    /// Create a push relay configuration
    ///
    /// Peer map update interval is 60 seconds and push delivery is retried
    /// 5 times.
    #[must_use]
    pub fn push(credentials: PushCredentials) -> Self {
        let config = Self {
            strategy: RelayStrategy::PushRelay(credentials),
            peer_map_update_interval_secs: PUSH_PEER_MAP_UPDATE_INTERVAL_SECS,
            push_send_retries: PUSH_SEND_RETRIES,
        };
        tracing::debug!(kind = %RelayKind::PushRelay, "created relay configuration");
        config
    }

    /// Create a configuration from an untyped strategy tag and optional credentials
    ///
    /// # Errors
    ///
    /// - [`RelayConfigError::InvalidArgument`] if `kind` is a push relay and no
    ///   credentials are given
    /// - [`RelayConfigError::UnsupportedForStrategy`] if credentials are given
    ///   for a plain relay
    pub fn from_parts(kind: RelayKind, credentials: Option<PushCredentials>) -> Result<Self> {
        match (kind, credentials) {
            (RelayKind::PlainRelay, None) => Ok(Self::plain()),
            (RelayKind::PlainRelay, Some(_)) => {
                tracing::warn!(%kind, "rejected push credentials");
                Err(RelayConfigError::unsupported("push credentials", kind))
            }
            (RelayKind::PushRelay, Some(credentials)) => Ok(Self::push(credentials)),
            (RelayKind::PushRelay, None) => Err(RelayConfigError::invalid_argument(
                "push relay requires push credentials",
            )),
        }
    }

    /// The relay strategy
    #[must_use]
    pub const fn strategy(&self) -> &RelayStrategy {
        &self.strategy
    }

    /// The relay strategy tag
    #[must_use]
    pub const fn kind(&self) -> RelayKind {
        self.strategy.kind()
    }

    /// Peer map update interval in seconds
    #[must_use]
    pub const fn peer_map_update_interval_secs(&self) -> u32 {
        self.peer_map_update_interval_secs
    }

    /// Peer map update interval
    ///
    /// Routing requests for the unreachable peer are answered by its relays,
    /// so the relays need a fresh copy of its peer map on this cadence.
    #[must_use]
    pub fn peer_map_update_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.peer_map_update_interval_secs))
    }

    /// Set the peer map update interval in place
    ///
    /// # Errors
    ///
    /// Returns [`RelayConfigError::InvalidArgument`] if `secs` is zero. The
    /// configuration is left unchanged on error.
    pub fn set_peer_map_update_interval_secs(&mut self, secs: u32) -> Result<&mut Self> {
        if secs == 0 {
            tracing::warn!(kind = %self.kind(), "rejected zero peer map update interval");
            return Err(RelayConfigError::invalid_argument(
                "peer map update interval must be positive",
            ));
        }

        self.peer_map_update_interval_secs = secs;
        tracing::debug!(kind = %self.kind(), interval_secs = secs, "peer map update interval set");
        Ok(self)
    }

    /// Builder form of [`Self::set_peer_map_update_interval_secs`]
    ///
    /// # Errors
    ///
    /// Returns [`RelayConfigError::InvalidArgument`] if `secs` is zero.
    pub fn with_peer_map_update_interval_secs(mut self, secs: u32) -> Result<Self> {
        self.set_peer_map_update_interval_secs(secs)?;
        Ok(self)
    }

    /// Push credentials; `None` for a plain relay
    #[must_use]
    pub const fn push_credentials(&self) -> Option<&PushCredentials> {
        self.strategy.push_credentials()
    }

    /// Number of retries when sending a push notification
    ///
    /// Always 0 for a plain relay, and ignored by consumers there.
    #[must_use]
    pub const fn push_send_retries(&self) -> u32 {
        self.push_send_retries
    }

    /// Set the number of push send retries in place
    ///
    /// # Errors
    ///
    /// Returns [`RelayConfigError::UnsupportedForStrategy`] on a plain relay.
    /// The configuration is left unchanged on error.
    pub fn set_push_send_retries(&mut self, retries: u32) -> Result<&mut Self> {
        if self.kind() != RelayKind::PushRelay {
            tracing::warn!(kind = %self.kind(), retries, "rejected push send retries");
            return Err(RelayConfigError::unsupported("push send retries", self.kind()));
        }

        self.push_send_retries = retries;
        tracing::debug!(kind = %self.kind(), retries, "push send retries set");
        Ok(self)
    }

    /// Builder form of [`Self::set_push_send_retries`]
    ///
    /// # Errors
    ///
    /// Returns [`RelayConfigError::UnsupportedForStrategy`] on a plain relay.
    pub fn with_push_send_retries(mut self, retries: u32) -> Result<Self> {
        self.set_push_send_retries(retries)?;
        Ok(self)
    }

    /// Everything the push-delivery service needs; `None` for a plain relay
    #[must_use]
    pub fn push_delivery(&self) -> Option<PushDelivery<'_>> {
        self.push_credentials().map(|credentials| PushDelivery {
            credentials,
            send_retries: self.push_send_retries,
        })
    }
}

impl Default for RelayConfiguration {
    fn default() -> Self {
        Self::plain()
    }
}

impl fmt::Display for RelayConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} relay, peer map update every {}s",
            self.kind(),
            self.peer_map_update_interval_secs
        )?;
        if let Some(delivery) = self.push_delivery() {
            write!(
                f,
                ", sender {}, {} push send retries",
                delivery.credentials.sender_id(),
                delivery.send_retries
            )?;
        }
        Ok(())
    }
}

/// Borrowed view handed to the push-delivery service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushDelivery<'a> {
    /// Credentials for the push service
    pub credentials: &'a PushCredentials,
    /// Number of retries when a push send fails
    pub send_retries: u32,
}
