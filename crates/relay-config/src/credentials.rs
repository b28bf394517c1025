//! Push-notification delivery credentials.
//!
//! The relay core never interprets these values; it only guarantees they are
//! present for a push relay and hands them to the push-delivery service.
//! The server authentication key is zeroized on drop and never formatted.

use crate::error::{RelayConfigError, Result};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Credentials for waking an unreachable device through a push service
#[derive(Clone)]
pub struct PushCredentials {
    sender_id: String,
    registration_id: String,
    /// Server authentication key (zeroized on drop)
    auth_key: Zeroizing<String>,
}

impl PushCredentials {
    /// Create new push credentials
    ///
    /// # Arguments
    ///
    /// * `sender_id` - Push service sender / project identity
    /// * `registration_id` - Registration token of the target device
    /// * `auth_key` - Server authentication key (will be zeroized on drop)
    ///
    /// # Errors
    ///
    /// Returns [`RelayConfigError::InvalidArgument`] if any component is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use relay_config::PushCredentials;
    ///
    /// let credentials = PushCredentials::new("1234567890", "device-token", "server-key").unwrap();
    /// assert_eq!(credentials.sender_id(), "1234567890");
    /// ```
    pub fn new(
        sender_id: impl Into<String>,
        registration_id: impl Into<String>,
        auth_key: impl Into<String>,
    ) -> Result<Self> {
        let sender_id = sender_id.into();
        let registration_id = registration_id.into();
        let auth_key = Zeroizing::new(auth_key.into());

        if sender_id.trim().is_empty() {
            return Err(RelayConfigError::invalid_argument(
                "push credentials require a sender id",
            ));
        }
        if registration_id.trim().is_empty() {
            return Err(RelayConfigError::invalid_argument(
                "push credentials require a device registration id",
            ));
        }
        if auth_key.trim().is_empty() {
            return Err(RelayConfigError::invalid_argument(
                "push credentials require an authentication key",
            ));
        }

        Ok(Self {
            sender_id,
            registration_id,
            auth_key,
        })
    }

    /// Push service sender identity
    #[must_use]
    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    /// Registration token of the target device
    #[must_use]
    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    /// Server authentication key
    ///
    /// Only the push-delivery service should read this.
    #[must_use]
    pub fn auth_key(&self) -> &str {
        &self.auth_key
    }
}

impl PartialEq for PushCredentials {
    fn eq(&self, other: &Self) -> bool {
        let key_eq: bool = self.auth_key.len() == other.auth_key.len()
            && bool::from(self.auth_key.as_bytes().ct_eq(other.auth_key.as_bytes()));

        self.sender_id == other.sender_id && self.registration_id == other.registration_id && key_eq
    }
}

impl Eq for PushCredentials {}

impl fmt::Debug for PushCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushCredentials")
            .field("sender_id", &self.sender_id)
            .field("registration_id", &self.registration_id)
            .field("auth_key", &"<redacted>")
            .finish()
    }
}
