//! Custom error types for finanzas-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finanzas-cli operations
#[derive(Error, Debug)]
pub enum FinanzasError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input (amounts, months, percents)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed import payloads
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinanzasError {
    /// Create a duplicate error for category names
    pub fn duplicate_category(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for category groups
    pub fn group_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category group",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an invalid-format error
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinanzasError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanzasError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finanzas-cli operations
pub type FinanzasResult<T> = Result<T, FinanzasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanzasError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_duplicate_category() {
        let err = FinanzasError::duplicate_category("Salud");
        assert_eq!(err.to_string(), "Category already exists: Salud");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_group_not_found() {
        let err = FinanzasError::group_not_found("viajes");
        assert_eq!(err.to_string(), "Category group not found: viajes");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_format() {
        let err = FinanzasError::InvalidFormat("missing transactions".into());
        assert!(err.is_invalid_format());
        assert_eq!(err.to_string(), "Invalid format: missing transactions");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanzasError = io_err.into();
        assert!(matches!(err, FinanzasError::Io(_)));
    }
}
