//! Main pseudonymization engine
//!
//! This module provides the core [`PseudonymizationEngine`] that turns
//! raw sensitive field values into consistent masked replacements.
//!
//! # Architecture
//!
//! The engine coordinates three concerns:
//! - **Validation**: identifier shape checking ([`IdentifierValidator`])
//! - **Generation**: replacement values per category policy
//! - **Consistency**: one mapping table per category guaranteeing that
//!   identical originals always yield identical replacements within a run
//!
//! All state (mapping tables, ordinal counter, random source) is owned
//! by one engine instance and dies with it; a fresh engine produces a
//! fresh, unrelated set of replacements.
//!
//! # Examples
//!
//! ```
//! use veil::config::RunConfig;
//! use veil::domain::Record;
//! use veil::masking::PseudonymizationEngine;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = RunConfig::new("accounts.xlsx", "accounts_masked.xlsx");
//! let mut engine = PseudonymizationEngine::new(&config)?;
//!
//! let mut record = Record::new()
//!     .with_name("Amit")
//!     .with_identifier("ABCDE1234F")
//!     .with_account("12345678");
//!
//! engine.process_record(&mut record)?;
//! assert_eq!(record.identifier.as_deref(), Some("XXXXX0001X"));
//! # Ok(())
//! # }
//! ```

use crate::config::RunConfig;
use crate::domain::record::{FieldCategory, Record};
use crate::domain::{Result, VeilError};
use crate::masking::audit::AuditTrail;
use crate::masking::generator::{AccountGenerator, IdentifierGenerator, NameGenerator};
use crate::masking::mapping::MappingTable;
use crate::masking::report::RunReport;
use crate::masking::validator::IdentifierValidator;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Sentinel written in place of an identifier that fails validation
///
/// Stable across all invalid inputs; it does not distinguish among
/// different malformed values and is never entered into a mapping table.
pub const INVALID_IDENTIFIER_SENTINEL: &str = "Invalid PAN";

/// Main pseudonymization engine
///
/// Processes rows strictly sequentially in input order. Sequential order
/// only matters for the positional identifier policy, where it makes the
/// assigned ordinals deterministic; under the synthetic policy, order is
/// immaterial to correctness.
///
/// The engine mutates records in place and has no other observable side
/// effect: it performs no file or network I/O of its own.
pub struct PseudonymizationEngine {
    categories: Vec<FieldCategory>,
    validator: IdentifierValidator,
    identifier_generator: IdentifierGenerator,
    account_generator: AccountGenerator,
    name_generator: NameGenerator,
    identifiers: MappingTable,
    accounts: MappingTable,
    names: MappingTable,
    rng: StdRng,
    report: RunReport,
    audit: Option<AuditTrail>,
    started: Instant,
}

impl PseudonymizationEngine {
    /// Create a new engine for a run
    ///
    /// Validates the configuration first; a missing dataset location or
    /// an empty category set is a fatal pre-condition. With `seed` set
    /// in the configuration, replacement generation is reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails or the
    /// identifier pattern cannot be compiled.
    pub fn new(config: &RunConfig) -> anyhow::Result<Self> {
        config.validate().context("Invalid run configuration")?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let audit = config.audit_enabled.then(AuditTrail::new);

        Ok(Self {
            categories: config.categories.clone(),
            validator: IdentifierValidator::new()?,
            identifier_generator: IdentifierGenerator::new(config.identifier_policy),
            account_generator: AccountGenerator::new(),
            name_generator: NameGenerator::new(),
            identifiers: MappingTable::new(),
            accounts: MappingTable::new(),
            names: MappingTable::new(),
            rng,
            report: RunReport::new(),
            audit,
            started: Instant::now(),
        })
    }

    /// Mask a single raw field value for a category
    ///
    /// Trims surrounding whitespace first. An empty (or all-whitespace)
    /// value passes through as the empty string and is never cached. A
    /// category the engine was not configured for is a hard error rather
    /// than a silent skip, since skipping would leave a sensitive column
    /// untouched.
    ///
    /// Repeated calls with the same original value return byte-identical
    /// output and do not advance the counter or the random source.
    pub fn mask_value(&mut self, category: FieldCategory, raw: &str) -> Result<String> {
        if !self.categories.contains(&category) {
            tracing::error!(category = %category, "Field routed to unconfigured category");
            return Err(VeilError::UnsupportedCategory(category));
        }

        let value = raw.trim();
        if value.is_empty() {
            self.report.add_pass_through();
            return Ok(String::new());
        }

        match category {
            FieldCategory::Identifier => self.mask_identifier(value),
            FieldCategory::AccountNumber => self.mask_account(value),
            FieldCategory::PersonalName => Ok(self.mask_name(value)),
        }
    }

    /// Process one record: mask every configured category present in it
    ///
    /// Fields the record does not carry are skipped; resolving which
    /// columns feed which category was the caller's job.
    pub fn process_record(&mut self, record: &mut Record) -> Result<()> {
        for category in self.categories.clone() {
            if let Some(raw) = record.field(category) {
                let raw = raw.to_owned();
                let masked = self.mask_value(category, &raw)?;
                record.set_field(category, masked);
            }
        }
        self.report.add_record();
        Ok(())
    }

    /// Process a batch of records strictly in order
    pub fn process_records(&mut self, records: &mut [Record]) -> Result<()> {
        for record in records.iter_mut() {
            self.process_record(record)?;
        }
        tracing::debug!(records = records.len(), "Processed record batch");
        Ok(())
    }

    /// Statistics collected so far
    pub fn report(&self) -> &RunReport {
        &self.report
    }

    /// Audit trail collected so far, if enabled
    pub fn audit_trail(&self) -> Option<&AuditTrail> {
        self.audit.as_ref()
    }

    /// Next ordinal the positional identifier policy would assign
    pub fn identifier_counter(&self) -> u32 {
        self.identifier_generator.counter()
    }

    /// Finish the run, yielding the final report and audit trail
    pub fn finish(mut self) -> (RunReport, Option<AuditTrail>) {
        self.report.set_processing_time(self.started.elapsed());
        tracing::info!(
            records = self.report.records_processed,
            masked = self.report.total_masked(),
            invalid = self.report.invalid_identifiers,
            "Pseudonymization run complete"
        );
        (self.report, self.audit)
    }

    fn mask_identifier(&mut self, value: &str) -> Result<String> {
        if !self.validator.is_valid(value) {
            tracing::debug!("Identifier failed shape validation");
            self.report.add_invalid();
            if let Some(audit) = self.audit.as_mut() {
                audit.add_invalid(FieldCategory::Identifier, value, INVALID_IDENTIFIER_SENTINEL);
            }
            return Ok(INVALID_IDENTIFIER_SENTINEL.to_string());
        }

        if let Some(masked) = self.identifiers.get(value) {
            let masked = masked.to_string();
            self.report.add_masked(FieldCategory::Identifier);
            return Ok(masked);
        }

        let masked = self
            .identifier_generator
            .next(&self.identifiers, &mut self.rng)?;
        self.identifiers.insert(value, masked.clone());
        self.note_new_mapping(FieldCategory::Identifier, value, &masked);
        Ok(masked)
    }

    fn mask_account(&mut self, value: &str) -> Result<String> {
        if let Some(masked) = self.accounts.get(value) {
            let masked = masked.to_string();
            self.report.add_masked(FieldCategory::AccountNumber);
            return Ok(masked);
        }

        let masked = self.account_generator.next(&self.accounts, &mut self.rng)?;
        self.accounts.insert(value, masked.clone());
        self.note_new_mapping(FieldCategory::AccountNumber, value, &masked);
        Ok(masked)
    }

    fn mask_name(&mut self, value: &str) -> String {
        if let Some(masked) = self.names.get(value) {
            let masked = masked.to_string();
            self.report.add_masked(FieldCategory::PersonalName);
            return masked;
        }

        let masked = self.name_generator.next(&mut self.rng);
        self.names.insert(value, masked.clone());
        self.note_new_mapping(FieldCategory::PersonalName, value, &masked);
        masked
    }

    fn note_new_mapping(&mut self, category: FieldCategory, original: &str, replacement: &str) {
        self.report.add_masked(category);
        self.report.add_mapping(category);
        if let Some(audit) = self.audit.as_mut() {
            audit.add_mapping(category, original, replacement);
        }
        tracing::debug!(category = %category, replacement, "Created mapping");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdentifierPolicy;

    fn test_config() -> RunConfig {
        let mut config = RunConfig::new("in.xlsx", "out.xlsx");
        config.seed = Some(99);
        config
    }

    #[test]
    fn test_engine_creation() {
        let engine = PseudonymizationEngine::new(&test_config());
        assert!(engine.is_ok());
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = RunConfig::default();
        assert!(PseudonymizationEngine::new(&config).is_err());
    }

    #[test]
    fn test_identifier_determinism_within_run() {
        let mut engine = PseudonymizationEngine::new(&test_config()).unwrap();

        let first = engine
            .mask_value(FieldCategory::Identifier, "ABCDE1234F")
            .unwrap();
        let second = engine
            .mask_value(FieldCategory::Identifier, "ABCDE1234F")
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first, "XXXXX0001X");
    }

    #[test]
    fn test_invalid_identifier_masks_to_sentinel() {
        let mut engine = PseudonymizationEngine::new(&test_config()).unwrap();

        let lowercase = engine
            .mask_value(FieldCategory::Identifier, "abcde1234f")
            .unwrap();
        let wrong_shape = engine
            .mask_value(FieldCategory::Identifier, "1234ABCDE5")
            .unwrap();

        assert_eq!(lowercase, INVALID_IDENTIFIER_SENTINEL);
        assert_eq!(wrong_shape, INVALID_IDENTIFIER_SENTINEL);
        // Invalid values never consume an ordinal
        assert_eq!(engine.identifier_counter(), 1);
    }

    #[test]
    fn test_cached_lookup_does_not_advance_counter() {
        let mut engine = PseudonymizationEngine::new(&test_config()).unwrap();

        engine
            .mask_value(FieldCategory::Identifier, "ABCDE1234F")
            .unwrap();
        assert_eq!(engine.identifier_counter(), 2);

        engine
            .mask_value(FieldCategory::Identifier, "ABCDE1234F")
            .unwrap();
        assert_eq!(engine.identifier_counter(), 2);
    }

    #[test]
    fn test_distinct_identifiers_get_distinct_masks() {
        let mut engine = PseudonymizationEngine::new(&test_config()).unwrap();

        let first = engine
            .mask_value(FieldCategory::Identifier, "ABCDE1234F")
            .unwrap();
        let second = engine
            .mask_value(FieldCategory::Identifier, "FGHIJ5678K")
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(second, "XXXXX0002X");
    }

    #[test]
    fn test_trimming_before_validation() {
        let mut engine = PseudonymizationEngine::new(&test_config()).unwrap();

        let padded = engine
            .mask_value(FieldCategory::Identifier, "  ABCDE1234F  ")
            .unwrap();
        let bare = engine
            .mask_value(FieldCategory::Identifier, "ABCDE1234F")
            .unwrap();
        assert_eq!(padded, bare);
    }

    #[test]
    fn test_empty_values_pass_through_uncached() {
        let mut engine = PseudonymizationEngine::new(&test_config()).unwrap();

        assert_eq!(
            engine.mask_value(FieldCategory::AccountNumber, "").unwrap(),
            ""
        );
        assert_eq!(
            engine.mask_value(FieldCategory::PersonalName, "   ").unwrap(),
            ""
        );
        assert_eq!(engine.report().passed_through, 2);
        assert_eq!(engine.report().total_masked(), 0);
    }

    #[test]
    fn test_unconfigured_category_is_hard_error() {
        let mut config = test_config();
        config.categories = vec![FieldCategory::Identifier];
        let mut engine = PseudonymizationEngine::new(&config).unwrap();

        let err = engine
            .mask_value(FieldCategory::PersonalName, "Amit")
            .unwrap_err();
        assert!(matches!(
            err,
            VeilError::UnsupportedCategory(FieldCategory::PersonalName)
        ));
    }

    #[test]
    fn test_account_masking_consistency() {
        let mut engine = PseudonymizationEngine::new(&test_config()).unwrap();

        let first = engine
            .mask_value(FieldCategory::AccountNumber, "12345678")
            .unwrap();
        let second = engine
            .mask_value(FieldCategory::AccountNumber, "12345678")
            .unwrap();
        let other = engine
            .mask_value(FieldCategory::AccountNumber, "87654321")
            .unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(first.len(), 8);
        assert!(first.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_synthetic_policy_produces_valid_shape() {
        let mut config = test_config();
        config.identifier_policy = IdentifierPolicy::Synthetic;
        let mut engine = PseudonymizationEngine::new(&config).unwrap();

        let masked = engine
            .mask_value(FieldCategory::Identifier, "ABCDE1234F")
            .unwrap();

        let validator = IdentifierValidator::new().unwrap();
        assert!(validator.is_valid(&masked));
        assert_ne!(masked, INVALID_IDENTIFIER_SENTINEL);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed: u64| {
            let mut config = test_config();
            config.seed = Some(seed);
            config.identifier_policy = IdentifierPolicy::Synthetic;
            let mut engine = PseudonymizationEngine::new(&config).unwrap();
            (
                engine
                    .mask_value(FieldCategory::Identifier, "ABCDE1234F")
                    .unwrap(),
                engine
                    .mask_value(FieldCategory::AccountNumber, "12345678")
                    .unwrap(),
                engine.mask_value(FieldCategory::PersonalName, "Amit").unwrap(),
            )
        };

        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn test_fresh_engine_fresh_mappings() {
        // Without a fixed seed, two runs over the same input should not
        // share synthetic account values (overwhelmingly likely).
        let mut config = RunConfig::new("in.xlsx", "out.xlsx");
        config.seed = None;
        let mut first = PseudonymizationEngine::new(&config).unwrap();
        let mut second = PseudonymizationEngine::new(&config).unwrap();

        let a = first
            .mask_value(FieldCategory::AccountNumber, "12345678")
            .unwrap();
        let b = second
            .mask_value(FieldCategory::AccountNumber, "12345678")
            .unwrap();
        // Both are valid 8-digit strings regardless
        assert_eq!(a.len(), 8);
        assert_eq!(b.len(), 8);
    }

    #[test]
    fn test_finish_reports_totals() {
        let mut engine = PseudonymizationEngine::new(&test_config()).unwrap();
        let mut record = Record::new()
            .with_name("Amit")
            .with_identifier("ABCDE1234F")
            .with_account("12345678");
        engine.process_record(&mut record).unwrap();

        let (report, audit) = engine.finish();
        assert_eq!(report.records_processed, 1);
        assert_eq!(report.total_masked(), 3);
        let audit = audit.unwrap();
        assert_eq!(audit.len(), 3);
    }
}
