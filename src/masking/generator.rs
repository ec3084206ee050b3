//! Replacement-value generation
//!
//! Generators produce the synthetic values the engine caches in its
//! mapping tables. Identifier and account generation retry against the
//! values already issued for their category, so replacements are unique
//! within a run; name generation draws from a small fixed list and is
//! allowed to collide.

use crate::config::IdentifierPolicy;
use crate::domain::{Result, VeilError};
use crate::masking::mapping::MappingTable;
use rand::rngs::StdRng;
use rand::Rng;

/// Attempts before giving up on a collision-free synthetic value
const MAX_GENERATION_ATTEMPTS: usize = 64;

/// Fixed reference list of placeholder names
///
/// Intentionally small and finite: name masking is non-injective, and
/// two distinct originals may legitimately draw the same placeholder.
const PLACEHOLDER_NAMES: [&str; 16] = [
    "Aarav", "Diya", "Kabir", "Meera", "Rohan", "Ananya", "Vihaan", "Isha", "Arjun", "Priya",
    "Dev", "Nisha", "Karan", "Tara", "Ravi", "Sana",
];

/// Generator for masked identifier values
///
/// Holds the run-scoped counter used by the positional policy. The
/// counter starts at 1 and advances exactly once per newly seen valid
/// identifier; cached lookups never touch it.
pub struct IdentifierGenerator {
    policy: IdentifierPolicy,
    counter: u32,
}

impl IdentifierGenerator {
    /// Create a generator for the configured policy
    pub fn new(policy: IdentifierPolicy) -> Self {
        Self { policy, counter: 1 }
    }

    /// Produce a masked value for a newly seen valid identifier
    pub fn next(&mut self, table: &MappingTable, rng: &mut StdRng) -> Result<String> {
        match self.policy {
            IdentifierPolicy::Positional => {
                let masked = format!("XXXXX{:04}X", self.counter);
                self.counter += 1;
                Ok(masked)
            }
            IdentifierPolicy::Synthetic => {
                for _ in 0..MAX_GENERATION_ATTEMPTS {
                    let candidate = random_identifier(rng);
                    if !table.contains_value(&candidate) {
                        return Ok(candidate);
                    }
                }
                Err(VeilError::Generation(
                    "exhausted attempts generating a collision-free identifier".to_string(),
                ))
            }
        }
    }

    /// Current counter position (next ordinal to be assigned)
    pub fn counter(&self) -> u32 {
        self.counter
    }
}

/// Generator for synthetic account numbers
#[derive(Debug, Default)]
pub struct AccountGenerator;

impl AccountGenerator {
    /// Create an account number generator
    pub fn new() -> Self {
        Self
    }

    /// Produce a fresh 8-digit account number, unique within the run
    ///
    /// The leading digit is drawn from 1-9, keeping the value inside the
    /// 8-digit numeric span.
    pub fn next(&self, table: &MappingTable, rng: &mut StdRng) -> Result<String> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = rng.gen_range(10_000_000u32..100_000_000u32).to_string();
            if !table.contains_value(&candidate) {
                return Ok(candidate);
            }
        }
        Err(VeilError::Generation(
            "exhausted attempts generating a collision-free account number".to_string(),
        ))
    }
}

/// Generator for placeholder names
#[derive(Debug, Default)]
pub struct NameGenerator;

impl NameGenerator {
    /// Create a name generator
    pub fn new() -> Self {
        Self
    }

    /// Draw a placeholder uniformly from the fixed reference list
    pub fn next(&self, rng: &mut StdRng) -> String {
        PLACEHOLDER_NAMES[rng.gen_range(0..PLACEHOLDER_NAMES.len())].to_string()
    }

    /// Whether a value belongs to the fixed reference list
    pub fn is_placeholder(value: &str) -> bool {
        PLACEHOLDER_NAMES.contains(&value)
    }
}

/// Generate a random identifier of the required shape:
/// 5 uppercase letters, 4 digits, 1 uppercase letter
fn random_identifier(rng: &mut StdRng) -> String {
    let mut out = String::with_capacity(10);
    for _ in 0..5 {
        out.push((b'A' + rng.gen_range(0..26u8)) as char);
    }
    for _ in 0..4 {
        out.push((b'0' + rng.gen_range(0..10u8)) as char);
    }
    out.push((b'A' + rng.gen_range(0..26u8)) as char);
    out
}
