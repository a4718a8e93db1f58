//! Contract error types for the global configuration
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Global configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Loading or saving the record failed
    Persistence {
        /// Underlying cause, rendered with its chain
        message: String,
    },
    /// No such configuration field
    UnknownField {
        /// Name as supplied by the caller
        name: String,
    },
    /// Request is missing data or carries malformed data
    Validation {
        /// Validation error message
        message: String,
    },
    /// Connectivity check could not complete (malformed URL, transport failure).
    /// Not retryable.
    Connectivity {
        /// Underlying cause
        message: String,
    },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistence { message } => {
                write!(f, "Persistence error: {}", message)
            }
            Self::UnknownField { name } => {
                write!(f, "Unknown configuration field: {}", name)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::Connectivity { message } => {
                write!(f, "Connectivity check failed: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
