//! Run configuration for Veil.
//!
//! A [`RunConfig`] names the dataset locations the surrounding I/O code
//! will read and write, selects which field categories a run processes,
//! and fixes the identifier-masking policy for the deployment. The
//! engine itself never opens the input or output paths; it only insists,
//! as a fatal pre-condition, that they are present before a run starts.
//!
//! Configuration is constructed by the caller (no file parsing here)
//! and can be adjusted through `VEIL_*` environment variables:
//!
//! ```bash
//! export VEIL_IDENTIFIER_POLICY="synthetic"
//! export VEIL_SEED="42"
//! ```

use crate::domain::record::FieldCategory;
use crate::domain::{Result, VeilError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identifier-masking policy
///
/// A deployment picks exactly one policy; the engine never blends them
/// within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierPolicy {
    /// Fully masked ordinal form: `"XXXXX"` + zero-padded counter + `"X"`.
    /// Deterministic given input order; encodes nothing but first-seen rank.
    Positional,
    /// Freshly generated fake identifier of the same shape
    /// (5 letters, 4 digits, 1 letter), independent of the original.
    Synthetic,
}

impl Default for IdentifierPolicy {
    fn default() -> Self {
        Self::Positional
    }
}

/// Configuration for one pseudonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Location of the source dataset (opened by the caller, not the engine)
    pub input_path: PathBuf,

    /// Location the caller writes the masked dataset to
    pub output_path: PathBuf,

    /// Field categories this run processes
    #[serde(default = "default_categories")]
    pub categories: Vec<FieldCategory>,

    /// Identifier-masking policy for this deployment
    #[serde(default)]
    pub identifier_policy: IdentifierPolicy,

    /// Optional seed for the run's random source; fix it for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,

    /// Collect an in-memory audit trail of created mappings
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_categories() -> Vec<FieldCategory> {
    FieldCategory::all().to_vec()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_path: PathBuf::new(),
            categories: default_categories(),
            identifier_policy: IdentifierPolicy::default(),
            seed: None,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl RunConfig {
    /// Create a configuration for the given dataset locations,
    /// processing all categories with default policies
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// Missing or empty dataset locations and an empty or duplicated
    /// category list are fatal pre-conditions: the run must not start.
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(VeilError::Configuration(
                "input_path must not be empty".to_string(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(VeilError::Configuration(
                "output_path must not be empty".to_string(),
            ));
        }
        if self.categories.is_empty() {
            return Err(VeilError::Configuration(
                "at least one field category must be configured".to_string(),
            ));
        }
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].contains(category) {
                return Err(VeilError::Configuration(format!(
                    "duplicate category in configuration: {category}"
                )));
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_INPUT_PATH") {
            self.input_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("VEIL_OUTPUT_PATH") {
            self.output_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("VEIL_IDENTIFIER_POLICY") {
            self.identifier_policy = match val.to_lowercase().as_str() {
                "positional" => IdentifierPolicy::Positional,
                "synthetic" => IdentifierPolicy::Synthetic,
                _ => {
                    return Err(VeilError::Configuration(format!(
                        "Invalid VEIL_IDENTIFIER_POLICY: {val}"
                    )))
                }
            };
        }

        if let Ok(val) = std::env::var("VEIL_SEED") {
            let seed = val.parse::<u64>().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_SEED value: {val}"))
            })?;
            self.seed = Some(seed);
        }

        if let Ok(val) = std::env::var("VEIL_AUDIT_ENABLED") {
            self.audit_enabled = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_AUDIT_ENABLED value: {val}"))
            })?;
        }

        Ok(())
    }
}
