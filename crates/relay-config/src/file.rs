//! TOML configuration file model.
//!
//! Integers are read as signed values so that out-of-range operator input
//! (a negative retry count, a zero interval) is reported as an invalid
//! argument rather than a type mismatch.

use crate::config::RelayConfiguration;
use crate::credentials::PushCredentials;
use crate::error::{RelayConfigError, Result};
use crate::strategy::RelayKind;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

/// Relay configuration as written by an operator
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfigFile {
    /// Relay strategy (`plain` or `push`)
    pub strategy: RelayKind,
    /// Peer map update interval in seconds (strategy default if omitted)
    #[serde(default)]
    pub peer_map_update_interval_secs: Option<i64>,
    /// Push send retries (push relay only)
    #[serde(default)]
    pub push_send_retries: Option<i64>,
    /// Push credentials (push relay only)
    #[serde(default)]
    pub push_credentials: Option<PushCredentialsFile>,
}

/// Push credentials section of a relay configuration file
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PushCredentialsFile {
    /// Push service sender identity
    pub sender_id: String,
    /// Registration token of the target device
    pub registration_id: String,
    /// Server authentication key
    pub auth_key: Zeroizing<String>,
}

impl std::fmt::Debug for PushCredentialsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushCredentialsFile")
            .field("sender_id", &self.sender_id)
            .field("registration_id", &self.registration_id)
            .field("auth_key", &"<redacted>")
            .finish()
    }
}

impl TryFrom<PushCredentialsFile> for PushCredentials {
    type Error = RelayConfigError;

    fn try_from(file: PushCredentialsFile) -> Result<Self> {
        PushCredentials::new(file.sender_id, file.registration_id, file.auth_key.as_str())
    }
}

impl TryFrom<RelayConfigFile> for RelayConfiguration {
    type Error = RelayConfigError;

    fn try_from(file: RelayConfigFile) -> Result<Self> {
        let credentials = file
            .push_credentials
            .map(PushCredentials::try_from)
            .transpose()?;
        let mut config = RelayConfiguration::from_parts(file.strategy, credentials)?;

        if let Some(secs) = file.peer_map_update_interval_secs {
            if secs <= 0 {
                return Err(RelayConfigError::InvalidArgument(
                    format!("peer map update interval must be positive, got {secs}").into(),
                ));
            }
            let secs = u32::try_from(secs).map_err(|_| {
                RelayConfigError::InvalidArgument(
                    format!("peer map update interval {secs} is out of range").into(),
                )
            })?;
            config.set_peer_map_update_interval_secs(secs)?;
        }

        if let Some(retries) = file.push_send_retries {
            if retries < 0 {
                return Err(RelayConfigError::InvalidArgument(
                    format!("push send retries must not be negative, got {retries}").into(),
                ));
            }
            let retries = u32::try_from(retries).map_err(|_| {
                RelayConfigError::InvalidArgument(
                    format!("push send retries {retries} is out of range").into(),
                )
            })?;
            config.set_push_send_retries(retries)?;
        }

        Ok(config)
    }
}

impl RelayConfiguration {
    /// Parse and validate a relay configuration from TOML
    ///
    /// # Errors
    ///
    /// Returns [`RelayConfigError::Parse`] for malformed TOML or unknown
    /// fields, and the validation errors of [`RelayConfiguration`] otherwise.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: RelayConfigFile =
            toml::from_str(contents).map_err(|err| parse_error(contents, &err))?;
        Self::try_from(file)
    }

    /// Load and validate a relay configuration file
    ///
    /// # Errors
    ///
    /// Returns [`RelayConfigError::Io`] if the file cannot be read, and the
    /// errors of [`Self::from_toml_str`] otherwise.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = Zeroizing::new(fs::read_to_string(path)?);
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), kind = %config.kind(), "loaded relay configuration");
        Ok(config)
    }
}

/// Build a parse error without quoting the source document
///
/// The TOML error display echoes the offending line, which may hold the push
/// authentication key. Only the message and position are kept, and the
/// message is dropped too when the error points into the `auth_key` line.
fn parse_error(contents: &str, err: &toml::de::Error) -> RelayConfigError {
    let Some(start) = err.span().map(|span| span.start) else {
        return RelayConfigError::Parse(err.message().to_string());
    };
    let Some(before) = contents.get(..start) else {
        return RelayConfigError::Parse(err.message().to_string());
    };

    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line = before.matches('\n').count() + 1;
    let column = before[line_start..].chars().count() + 1;
    let line_text = contents[line_start..].lines().next().unwrap_or_default();

    let message = if line_text.contains("auth_key") {
        "invalid auth_key value"
    } else {
        err.message()
    };

    RelayConfigError::Parse(format!("{message} at line {line}, column {column}"))
}
