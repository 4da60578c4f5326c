//! Problem records and problem-ID extraction from solution file names.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A practice problem.
///
/// Immutable once loaded. `id` is 1-based and doubles as the position of the
/// record in its store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Exact expected stdout of a correct solution (without trailing newline).
    pub answer: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl Problem {
    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Problem {}: {}", self.id, self.name)
    }
}

/// Difficulty rating as a percentage.
///
/// Invariant: `0 <= value <= 100`. Enforced on construction and on
/// deserialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(Self(v)),
            _ => Err(DomainError::DifficultyOutOfRange { value }),
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Parse a user-supplied problem ID.
///
/// Only checks that `value` is an integer; whether it resolves is up to the
/// store.
pub fn parse_problem_id(value: &str) -> Result<i64, DomainError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| DomainError::InvalidProblemId {
            value: value.to_string(),
        })
}

// First run of up to three digits that does not continue an earlier digit.
static PROBLEM_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])([0-9]{1,3})").expect("problem id pattern is valid")
});

/// Extract the problem ID encoded in a solution file's base name.
///
/// `test/euler_001.py` → `1`, `abc999xyz` → `999`. Returns `None` when the
/// base name has no digits. The ID is not checked against any store.
pub fn extract_problem_id(path: impl AsRef<Path>) -> Option<u32> {
    let file_name = path.as_ref().file_name()?.to_string_lossy();
    let captures = PROBLEM_ID.captures(&file_name)?;
    captures.get(1)?.as_str().parse().ok()
}
