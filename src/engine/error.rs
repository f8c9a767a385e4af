//! Engine error types.
//!
//! The engine has a single intrinsic error: rejecting an invalid
//! configuration. Every other operation is total over the state space, so
//! nothing else here can fail.

use thiserror::Error;

/// Errors that can occur in the Pomodoro engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A supplied duration or interval was not a positive integer.
    #[error("invalid configuration: {field} must be greater than zero")]
    InvalidConfiguration {
        /// The first configuration field that failed validation.
        field: &'static str,
    },
}

impl EngineError {
    /// Returns true if this error is a configuration rejection.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Returns true if the error is recoverable and the timer can continue.
    ///
    /// A rejected configuration leaves the previous configuration and state
    /// untouched, so the caller can always retry.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidConfiguration {
            field: "work_seconds",
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: work_seconds must be greater than zero"
        );
    }

    #[test]
    fn test_is_invalid_configuration() {
        let err = EngineError::InvalidConfiguration {
            field: "long_break_interval",
        };
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_is_recoverable() {
        let err = EngineError::InvalidConfiguration {
            field: "short_break_seconds",
        };
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_clone_and_eq() {
        let err = EngineError::InvalidConfiguration {
            field: "work_seconds",
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);

        let other = EngineError::InvalidConfiguration {
            field: "long_break_seconds",
        };
        assert_ne!(err, other);
    }
}
