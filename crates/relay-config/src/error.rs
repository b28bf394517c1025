//! Error types for relay configuration
//!
//! Every error raised here is synchronous and tied to the call that violated
//! a precondition. Apart from [`RelayConfigError::Io`], the caller can always
//! recover by supplying a corrected value.

use crate::strategy::RelayKind;
use std::borrow::Cow;
use thiserror::Error;

/// Errors that can occur while building or tuning a relay configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayConfigError {
    /// A documented precondition was violated (missing credentials,
    /// non-positive interval, negative retry count)
    #[error("Invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),

    /// A tunable was set on a strategy it does not apply to
    #[error("{operation} is not supported for {kind} relay")]
    UnsupportedForStrategy {
        /// The rejected operation
        operation: &'static str,
        /// Strategy of the configuration the operation was applied to
        kind: RelayKind,
    },

    /// Malformed configuration document
    #[error("Config parse error: {0}")]
    Parse(String),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(String),
}

impl RelayConfigError {
    /// Returns true if the caller can fix the error by supplying different input
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RelayConfigError::Io(_))
    }

    /// Create an invalid argument error with static context (zero allocation)
    #[must_use]
    pub const fn invalid_argument(context: &'static str) -> Self {
        RelayConfigError::InvalidArgument(Cow::Borrowed(context))
    }

    /// Create an unsupported-for-strategy error
    #[must_use]
    pub const fn unsupported(operation: &'static str, kind: RelayKind) -> Self {
        RelayConfigError::UnsupportedForStrategy { operation, kind }
    }
}

impl From<std::io::Error> for RelayConfigError {
    fn from(err: std::io::Error) -> Self {
        RelayConfigError::Io(err.to_string())
    }
}

/// Result type for relay configuration operations
pub type Result<T> = std::result::Result<T, RelayConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(RelayConfigError::invalid_argument("test").is_recoverable());
        assert!(RelayConfigError::unsupported("op", RelayKind::PlainRelay).is_recoverable());
        assert!(RelayConfigError::Parse("bad".to_string()).is_recoverable());
        assert!(!RelayConfigError::Io("gone".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = RelayConfigError::invalid_argument("interval must be positive");
        assert_eq!(err.to_string(), "Invalid argument: interval must be positive");

        let err = RelayConfigError::unsupported("push send retries", RelayKind::PlainRelay);
        assert_eq!(
            err.to_string(),
            "push send retries is not supported for plain relay"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RelayConfigError = io_err.into();
        assert!(matches!(err, RelayConfigError::Io(_)));
    }
}
