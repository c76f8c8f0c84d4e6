//! Error types for the PocketPal registry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole PocketPal workspace.
///
/// Typed, structured variants with automatic conversion from the common
/// error types via `From`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PocketPalError {
    /// A submitted profile is missing a required field or is unreadable
    #[error("Invalid profile: {reason}")]
    InvalidProfile { reason: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PocketPalError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidProfile error for a field that was not supplied
    pub fn missing_field(field: &str) -> Self {
        Self::InvalidProfile {
            reason: format!("missing field `{}`", field),
        }
    }

    /// Creates an InvalidProfile error with a free-form reason
    pub fn invalid_profile(reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            reason: reason.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidProfile error
    pub fn is_invalid_profile(&self) -> bool {
        matches!(self, Self::InvalidProfile { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PocketPalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PocketPalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PocketPalError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PocketPalError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PocketPalError>`.
pub type Result<T> = std::result::Result<T, PocketPalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = PocketPalError::missing_field("email");
        assert!(err.is_invalid_profile());
        assert_eq!(err.to_string(), "Invalid profile: missing field `email`");
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: PocketPalError = io.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_toml_conversion() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("= broken");
        let err: PocketPalError = parse.unwrap_err().into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: TOML"));
    }
}
