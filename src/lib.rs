// Veil - Pseudonymization Engine for Tabular Identity Data
// Copyright (c) 2026 Veil Contributors
// Licensed under the MIT License

//! # Veil - Pseudonymization Engine
//!
//! Veil replaces sensitive identity fields in tabular datasets with
//! consistent synthetic values: a PAN-shaped tax identifier, a bank
//! account number, and a personal name. Within a run, identical
//! originals always receive identical replacements; identifiers that
//! fail shape validation are flagged with a fixed sentinel instead.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Validating** identifier shape (5 uppercase letters, 4 digits, 1 uppercase letter)
//! - **Generating** replacement values per category policy
//! - **Caching** one mapping per distinct original per run
//! - **Reporting** masking statistics and a hashed audit trail
//!
//! Locating the dataset, reading rows, resolving which columns hold
//! which field, and writing results back out are the embedding
//! application's responsibility; Veil consumes already-resolved
//! [`domain::Record`] values and mutates them in place.
//!
//! ## Architecture
//!
//! - [`masking`] - The pseudonymization engine, validators, generators, and caches
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Run configuration
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use veil::config::RunConfig;
//! use veil::domain::Record;
//! use veil::masking::PseudonymizationEngine;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = RunConfig::new("accounts.xlsx", "accounts_masked.xlsx");
//!     let mut engine = PseudonymizationEngine::new(&config)?;
//!
//!     let mut records = vec![
//!         Record::new()
//!             .with_name("Amit")
//!             .with_identifier("ABCDE1234F")
//!             .with_account("12345678"),
//!     ];
//!
//!     engine.process_records(&mut records)?;
//!     let (report, _audit) = engine.finish();
//!     println!("{}", report.format_console());
//!     Ok(())
//! }
//! ```
//!
//! ## Consistency Guarantees
//!
//! - Per category and original value, at most one replacement is ever
//!   created per run; repeated lookups are byte-identical.
//! - Synthetic identifiers and account numbers are unique within a run
//!   (generation retries on collision).
//! - Name masking draws from a small fixed placeholder list and is
//!   deliberately non-injective.
//! - Mappings are run-scoped: a fresh engine yields fresh, unrelated
//!   replacements.
//!
//! ## Error Handling
//!
//! Malformed field values are not errors; the engine substitutes the
//! sentinel and continues. [`domain::VeilError`] covers the conditions
//! that stop a run, such as a field routed to a category the engine was
//! not configured to process:
//!
//! ```rust
//! use veil::domain::{Result, VeilError};
//!
//! fn check(result: Result<String>) {
//!     if let Err(VeilError::UnsupportedCategory(category)) = result {
//!         eprintln!("misconfigured column binding: {category}");
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Veil uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting pseudonymization run");
//! warn!(category = "PAN", "No identifier column configured");
//! ```

pub mod config;
pub mod domain;
pub mod logging;
pub mod masking;
