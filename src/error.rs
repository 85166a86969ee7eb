//! Error types for signal-hub.

use crate::hub::Signal;
use std::fmt;

/// Result type alias for signal-hub operations.
pub type Result<T> = std::result::Result<T, HubError>;

/// Errors that can occur when working with the hub, factory or scenarios.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// An argument was outside the accepted set (e.g. an unknown ball tag).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// One or more observers failed while a signal was delivered.
    ///
    /// Every subscribed observer was still visited before this error was
    /// returned.
    #[error("{} of {} observers failed to handle signal {}", .failures.len(), .attempted, .signal)]
    DeliveryFailed {
        /// The signal that was fired
        signal: Signal,
        /// Number of deliveries attempted
        attempted: usize,
        /// Each failed delivery, in subscription order
        failures: Vec<DeliveryFailure>,
    },

    /// Failed to load a scenario from its sources.
    #[error("Failed to load scenario: {0}")]
    LoadError(String),

    /// Failed to deserialize a scenario.
    #[error("Failed to deserialize scenario: {0}")]
    DeserializationError(String),

    /// Scenario validation failed.
    #[error("Scenario validation failed: {0}")]
    ValidationError(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Error reported by an observer that could not apply a signal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UpdateError {
    message: String,
}

impl UpdateError {
    /// Create an update error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single failed delivery inside a `fire` pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    /// Zero-based position of the observer in the subscription order
    pub position: usize,
    /// The error the observer returned
    pub error: UpdateError,
}

impl fmt::Display for DeliveryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer #{}: {}", self.position, self.error)
    }
}

/// Validation error for scenario validation.
#[derive(Debug)]
pub enum ValidationError {
    /// Custom validation error with a message.
    Custom(String),

    /// A specific field has an invalid value.
    InvalidField {
        /// The field name/path
        field: String,
        /// The reason why it's invalid
        reason: String,
    },

    /// Multiple validation errors occurred.
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Create a custom validation error.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(msg) => write!(f, "{}", msg),
            Self::InvalidField { field, reason } => {
                write!(f, "Field '{}' is invalid: {}", field, reason)
            }
            Self::Multiple(errors) => {
                writeln!(f, "Multiple validation errors:")?;
                for (i, err) in errors.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for HubError {
    fn from(err: ValidationError) -> Self {
        HubError::ValidationError(err.to_string())
    }
}
