//! In-memory audit trail for masking operations
//!
//! The trail records one event per mapping created and per invalid
//! identifier encountered. Original values are never stored in
//! plaintext, only as SHA-256 hashes; replacements are synthetic and
//! safe to keep. The engine holds the trail in memory and hands it to
//! the caller at the end of the run, so no file I/O happens here.

use crate::domain::record::FieldCategory;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// What an audit event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// A new original-to-masked mapping was created
    Mapped,
    /// The value failed validation and received the sentinel
    Invalid,
}

/// One masking operation, with the original hashed
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub timestamp: DateTime<Utc>,
    pub category: FieldCategory,
    pub outcome: AuditOutcome,
    /// SHA-256 hash of the original value (never log plaintext)
    pub original_hash: String,
    /// Replacement written back into the row
    pub replacement: String,
}

/// Audit trail for one run
#[derive(Debug, Default)]
pub struct AuditTrail {
    events: Vec<AuditEvent>,
}

impl AuditTrail {
    /// Create an empty audit trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly created mapping
    pub fn add_mapping(&mut self, category: FieldCategory, original: &str, replacement: &str) {
        self.push(category, AuditOutcome::Mapped, original, replacement);
    }

    /// Record a value that failed validation
    pub fn add_invalid(&mut self, category: FieldCategory, original: &str, sentinel: &str) {
        self.push(category, AuditOutcome::Invalid, original, sentinel);
    }

    fn push(
        &mut self,
        category: FieldCategory,
        outcome: AuditOutcome,
        original: &str,
        replacement: &str,
    ) {
        self.events.push(AuditEvent {
            timestamp: Utc::now(),
            category,
            outcome,
            original_hash: hash_value(original),
            replacement: replacement.to_string(),
        });
    }

    /// Events recorded so far, in order
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Number of events recorded
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the trail is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serialize the trail as newline-delimited JSON
    pub fn format_json_lines(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }
}

/// Hash a sensitive value using SHA-256
pub fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
