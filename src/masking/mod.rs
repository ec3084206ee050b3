//! Pseudonymization engine
//!
//! The core of Veil: per-category validation, replacement-value
//! generation, and the mapping cache that keeps identical originals
//! mapped to identical replacements for the lifetime of a run.

pub mod audit;
pub mod engine;
pub mod generator;
pub mod mapping;
pub mod report;
pub mod validator;

// Re-export commonly used items
pub use engine::{PseudonymizationEngine, INVALID_IDENTIFIER_SENTINEL};
pub use mapping::MappingTable;
pub use report::RunReport;
pub use validator::IdentifierValidator;
