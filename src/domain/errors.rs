//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use crate::domain::record::FieldCategory;
use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the crate.
/// Malformed field values are not errors: a malformed identifier masks
/// to the fixed sentinel and processing continues. Errors are reserved
/// for conditions that must stop the run.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The engine was handed a field category it was not configured to process.
    ///
    /// Silently skipping would leave a sensitive column untouched, so
    /// this fails the run instead.
    #[error("Category {0} is not configured for this run")]
    UnsupportedCategory(FieldCategory),

    /// Replacement-value generation errors (e.g. collision retries exhausted)
    #[error("Generation error: {0}")]
    Generation(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_veil_error_display() {
        let err = VeilError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_unsupported_category_display() {
        let err = VeilError::UnsupportedCategory(FieldCategory::AccountNumber);
        assert_eq!(
            err.to_string(),
            "Category ACCOUNT is not configured for this run"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let veil_err: VeilError = io_err.into();
        assert!(matches!(veil_err, VeilError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let veil_err: VeilError = json_err.into();
        assert!(matches!(veil_err, VeilError::Serialization(_)));
    }

    #[test]
    fn test_veil_error_implements_std_error() {
        let err = VeilError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
