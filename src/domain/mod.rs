//! Domain models and types for Veil.
//!
//! This module contains the core domain models, types, and business rules
//! for the pseudonymization engine.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Row model** ([`Record`], [`FieldCategory`])
//! - **Error types** ([`VeilError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VeilError>`]:
//!
//! ```rust
//! use veil::domain::{Result, VeilError};
//!
//! fn example(raw: &str) -> Result<()> {
//!     if raw.is_empty() {
//!         return Err(VeilError::Validation("empty input".to_string()));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Note that a *malformed* field value is not an error: the engine masks
//! it with a fixed sentinel and keeps going. `VeilError` covers the
//! conditions that must stop a run, such as a misconfigured category set.

pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::VeilError;
pub use record::{FieldCategory, Record};
pub use result::Result;
