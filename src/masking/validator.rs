//! Identifier shape validation

use crate::domain::{Result, VeilError};
use regex::Regex;

/// Required identifier shape: 5 uppercase letters, 4 digits, 1 uppercase letter
const IDENTIFIER_PATTERN: &str = r"^[A-Z]{5}[0-9]{4}[A-Z]$";

/// Validator for the PAN-shaped tax identifier
///
/// Checks the fixed-position character classes of a candidate string.
/// Case is significant: lowercase letters fail validation rather than
/// being normalized. The validator has no side effects and no state
/// beyond its compiled pattern, so validity of a given value never
/// changes within a run.
pub struct IdentifierValidator {
    pattern: Regex,
}

impl IdentifierValidator {
    /// Create a new identifier validator
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(IDENTIFIER_PATTERN)
            .map_err(|e| VeilError::Validation(format!("Invalid identifier pattern: {e}")))?;
        Ok(Self { pattern })
    }

    /// Check whether a candidate conforms to the required identifier shape
    ///
    /// The caller is expected to have trimmed surrounding whitespace; no
    /// further normalization is applied here.
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}

impl Default for IdentifierValidator {
    fn default() -> Self {
        Self::new().expect("Failed to create default IdentifierValidator")
    }
}
