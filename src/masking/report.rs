//! Run reporting for pseudonymization
//!
//! This module provides formatted reports for a completed (or in-flight)
//! run, showing masking statistics per field category, invalid-identifier
//! counts, and warnings.

use crate::domain::record::FieldCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Statistics for one pseudonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Total records processed
    pub records_processed: usize,

    /// Masked field values by category (every non-empty value routed
    /// through a policy, cached hits included)
    pub masked_by_category: HashMap<FieldCategory, usize>,

    /// Distinct originals mapped by category
    pub distinct_by_category: HashMap<FieldCategory, usize>,

    /// Identifier values that failed shape validation (occurrences)
    pub invalid_identifiers: usize,

    /// Empty fields passed through unmasked
    pub passed_through: usize,

    /// Warnings collected during the run
    pub warnings: Vec<String>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Total processing time in milliseconds, set when the run finishes
    pub processing_time_ms: u64,
}

impl RunReport {
    /// Create a new empty run report
    pub fn new() -> Self {
        Self {
            records_processed: 0,
            masked_by_category: HashMap::new(),
            distinct_by_category: HashMap::new(),
            invalid_identifiers: 0,
            passed_through: 0,
            warnings: Vec::new(),
            started_at: Utc::now(),
            processing_time_ms: 0,
        }
    }

    /// Count a processed record
    pub fn add_record(&mut self) {
        self.records_processed += 1;
    }

    /// Count a masked field value
    pub fn add_masked(&mut self, category: FieldCategory) {
        *self.masked_by_category.entry(category).or_insert(0) += 1;
    }

    /// Count a newly created mapping
    pub fn add_mapping(&mut self, category: FieldCategory) {
        *self.distinct_by_category.entry(category).or_insert(0) += 1;
    }

    /// Count an identifier that failed validation
    pub fn add_invalid(&mut self) {
        self.invalid_identifiers += 1;
    }

    /// Count an empty field passed through unmasked
    pub fn add_pass_through(&mut self) {
        self.passed_through += 1;
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Record the total processing time
    pub fn set_processing_time(&mut self, elapsed: std::time::Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
    }

    /// Total masked field values across categories
    pub fn total_masked(&self) -> usize {
        self.masked_by_category.values().sum()
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push_str("\n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                  PSEUDONYMIZATION RUN REPORT                  \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("\n");

        output.push_str("SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Records Processed:     {}\n",
            self.records_processed
        ));
        output.push_str(&format!(
            "  Values Masked:         {}\n",
            self.total_masked()
        ));
        output.push_str(&format!(
            "  Invalid Identifiers:   {}\n",
            self.invalid_identifiers
        ));
        output.push_str(&format!(
            "  Empty Passed Through:  {}\n",
            self.passed_through
        ));
        output.push_str(&format!(
            "  Processing Time:       {} ms\n",
            self.processing_time_ms
        ));
        output.push_str("\n");

        if !self.masked_by_category.is_empty() {
            output.push_str("MASKED VALUES BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut categories: Vec<_> = self.masked_by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1));

            for (category, count) in categories {
                let distinct = self.distinct_by_category.get(category).copied().unwrap_or(0);
                output.push_str(&format!(
                    "  {:10} {:>6} masked, {:>6} distinct\n",
                    category.label(),
                    count,
                    distinct
                ));
            }
            output.push_str("\n");
        }

        if !self.warnings.is_empty() {
            output.push_str("WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {}\n", warning));
            }
            output.push_str("\n");
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    ///
    /// Convenience for callers; the engine itself never writes files.
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .format_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_creation() {
        let report = RunReport::new();
        assert_eq!(report.records_processed, 0);
        assert_eq!(report.total_masked(), 0);
        assert!(report.masked_by_category.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_report_counters() {
        let mut report = RunReport::new();
        report.add_record();
        report.add_masked(FieldCategory::Identifier);
        report.add_masked(FieldCategory::Identifier);
        report.add_mapping(FieldCategory::Identifier);
        report.add_invalid();
        report.add_pass_through();

        assert_eq!(report.records_processed, 1);
        assert_eq!(
            report.masked_by_category.get(&FieldCategory::Identifier),
            Some(&2)
        );
        assert_eq!(
            report.distinct_by_category.get(&FieldCategory::Identifier),
            Some(&1)
        );
        assert_eq!(report.invalid_identifiers, 1);
        assert_eq!(report.passed_through, 1);
    }

    #[test]
    fn test_format_console() {
        let mut report = RunReport::new();
        report.records_processed = 3;
        report.add_masked(FieldCategory::PersonalName);
        report.invalid_identifiers = 1;

        let output = report.format_console();
        assert!(output.contains("PSEUDONYMIZATION RUN REPORT"));
        assert!(output.contains("Records Processed:     3"));
        assert!(output.contains("Invalid Identifiers:   1"));
        assert!(output.contains("PERSON"));
    }

    #[test]
    fn test_format_json() {
        let mut report = RunReport::new();
        report.add_masked(FieldCategory::AccountNumber);

        let json = report.format_json().unwrap();
        assert!(json.contains("account_number"));
    }
}
