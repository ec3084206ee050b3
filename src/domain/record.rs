//! Row-level data model for pseudonymization
//!
//! A [`Record`] carries the already-resolved sensitive fields of one row
//! of the source dataset. Column-to-field binding (by position or header
//! text) is the caller's responsibility; by the time a `Record` reaches
//! the engine, each field is either present as a raw string or absent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a sensitive field, selecting the validation and
/// replacement policy that applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    /// PAN-shaped tax identifier (5 uppercase letters, 4 digits, 1 uppercase letter)
    Identifier,
    /// Bank account number
    AccountNumber,
    /// Personal name
    PersonalName,
}

impl FieldCategory {
    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Identifier => "PAN",
            Self::AccountNumber => "ACCOUNT",
            Self::PersonalName => "PERSON",
        }
    }

    /// All categories, in the order rows are processed
    pub fn all() -> [FieldCategory; 3] {
        [
            Self::PersonalName,
            Self::Identifier,
            Self::AccountNumber,
        ]
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row's sensitive fields, mutated in place by the engine
///
/// Fields the dataset does not carry are `None` and are skipped during
/// processing. An empty string is a present-but-blank field: the engine
/// passes it through unmasked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Personal name field, if the row carries one
    pub name: Option<String>,
    /// Tax identifier field, if the row carries one
    pub identifier: Option<String>,
    /// Account number field, if the row carries one
    pub account: Option<String>,
}

impl Record {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the personal name field
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the identifier field
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Sets the account number field
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Borrow the raw value for a category, if the row carries it
    pub fn field(&self, category: FieldCategory) -> Option<&str> {
        match category {
            FieldCategory::PersonalName => self.name.as_deref(),
            FieldCategory::Identifier => self.identifier.as_deref(),
            FieldCategory::AccountNumber => self.account.as_deref(),
        }
    }

    /// Write a replacement value back into the field for a category
    pub fn set_field(&mut self, category: FieldCategory, value: String) {
        match category {
            FieldCategory::PersonalName => self.name = Some(value),
            FieldCategory::Identifier => self.identifier = Some(value),
            FieldCategory::AccountNumber => self.account = Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(FieldCategory::Identifier.label(), "PAN");
        assert_eq!(FieldCategory::AccountNumber.label(), "ACCOUNT");
        assert_eq!(FieldCategory::PersonalName.label(), "PERSON");
    }

    #[test]
    fn test_record_builder() {
        let record = Record::new()
            .with_name("Amit")
            .with_identifier("ABCDE1234F")
            .with_account("12345678");

        assert_eq!(record.field(FieldCategory::PersonalName), Some("Amit"));
        assert_eq!(record.field(FieldCategory::Identifier), Some("ABCDE1234F"));
        assert_eq!(record.field(FieldCategory::AccountNumber), Some("12345678"));
    }

    #[test]
    fn test_record_missing_fields() {
        let record = Record::new().with_name("Raj");
        assert_eq!(record.field(FieldCategory::Identifier), None);
        assert_eq!(record.field(FieldCategory::AccountNumber), None);
    }

    #[test]
    fn test_set_field_overwrites() {
        let mut record = Record::new().with_identifier("ABCDE1234F");
        record.set_field(FieldCategory::Identifier, "XXXXX0001X".to_string());
        assert_eq!(record.identifier.as_deref(), Some("XXXXX0001X"));
    }

    #[test]
    fn test_category_serde_round_trip() {
        let json = serde_json::to_string(&FieldCategory::AccountNumber).unwrap();
        assert_eq!(json, "\"account_number\"");
        let parsed: FieldCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FieldCategory::AccountNumber);
    }
}
