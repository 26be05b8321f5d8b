//! # Assignment Mapping
//!
//! The ordered key to field mapping that lookups and update checks read
//! from. Keys are opaque strings (a team id, a customer name) and fields are
//! kept as raw text: validating them is the policy layer's job, and a stored
//! field may well be malformed.
//!
//! A mapping can be written as plain text, one assignment per line:
//!
//! ```text
//! # team = field
//! 12 = 1.1.1.10
//! 34 = 10.1.1.100-10.1.1.115,10.1.2.1
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentsError {
    #[error("line {line}: expected 'key = field', got '{content}'")]
    MissingSeparator { line: usize, content: String },

    #[error("line {line}: key cannot be empty")]
    EmptyKey { line: usize },

    #[error("line {line}: key '{key}' is assigned more than once")]
    DuplicateKey { line: usize, key: String },
}

/// Ordered `key -> raw field` pairs. Insertion order is lookup order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignments {
    pairs: Vec<(String, String)>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a mapping file in the `key = field` line format.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read assignments from {}", path.display()))?;

        content
            .parse::<Assignments>()
            .with_context(|| format!("Failed to parse assignments in {}", path.display()))
    }

    /// Sets the field for `key`, keeping the key's original position when it
    /// already exists.
    pub fn insert(&mut self, key: impl Into<String>, field: impl Into<String>) {
        let key = key.into();
        let field = field.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = field,
            None => self.pairs.push((key, field)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, field)| field.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keeps only the assignments for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.pairs.retain(|(key, field)| keep(key, field));
    }

    /// Pairs in lookup order, borrowed as `(&key, &field)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, f)| (k.as_str(), f.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, F: Into<String>> FromIterator<(K, F)> for Assignments {
    fn from_iter<T: IntoIterator<Item = (K, F)>>(iter: T) -> Self {
        let mut assignments = Assignments::new();
        for (key, field) in iter {
            assignments.insert(key, field);
        }
        assignments
    }
}

impl FromStr for Assignments {
    type Err = AssignmentsError;

    /// Blank lines and `#` comments are skipped. Keys and fields are trimmed
    /// of surrounding whitespace; the field itself is stored verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut assignments = Assignments::new();

        for (idx, raw_line) in s.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw_line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (key, field) = parse_assignment(trimmed).ok_or_else(|| {
                AssignmentsError::MissingSeparator {
                    line,
                    content: trimmed.to_string(),
                }
            })?;

            if key.is_empty() {
                return Err(AssignmentsError::EmptyKey { line });
            }
            if assignments.contains_key(key) {
                return Err(AssignmentsError::DuplicateKey {
                    line,
                    key: key.to_string(),
                });
            }

            assignments.insert(key, field);
        }

        Ok(assignments)
    }
}

/// Splits `key=field` (or `key = field`) on the first `=`.
pub fn parse_assignment(s: &str) -> Option<(&str, &str)> {
    let (key, field) = s.split_once('=')?;
    Some((key.trim(), field.trim()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
