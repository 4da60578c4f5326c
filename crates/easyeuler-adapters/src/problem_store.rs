//! Problem store backed by a JSON array held in memory.
//!
//! The array is indexed by ID: the record at position `i` must carry
//! `id == i + 1`. Lookups never wrap, so `get(0)` and `get(-1)` are absent.

use std::path::Path;

use easyeuler_core::{
    application::{ApplicationError, ports::ProblemStore},
    domain::{DomainError, Problem},
    error::EulerResult,
};
use tracing::{debug, instrument};

/// Problem data compiled into the binary.
const BUILTIN_PROBLEMS: &str = include_str!("../data/problems.json");

/// Read-only, ID-indexed problem list.
#[derive(Debug, Clone)]
pub struct InMemoryProblemStore {
    problems: Vec<Problem>,
}

impl InMemoryProblemStore {
    /// Build a store from already-parsed problems.
    pub fn new(problems: Vec<Problem>) -> EulerResult<Self> {
        for (index, problem) in problems.iter().enumerate() {
            let expected = index + 1;
            if problem.id as usize != expected {
                return Err(DomainError::InvalidProblemData(format!(
                    "record {expected} has id {}",
                    problem.id
                ))
                .into());
            }
        }
        Ok(Self { problems })
    }

    /// The problem set shipped with EasyEuler.
    pub fn builtin() -> EulerResult<Self> {
        Self::from_json_str(BUILTIN_PROBLEMS, "built-in data")
    }

    /// Parse a JSON array of problem records.
    pub fn from_json_str(json: &str, source_name: &str) -> EulerResult<Self> {
        let problems: Vec<Problem> =
            serde_json::from_str(json).map_err(|e| ApplicationError::ProblemLoadFailed {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
        debug!(count = problems.len(), source = source_name, "Problems parsed");
        Self::new(problems)
    }

    /// Load a JSON problem file from disk.
    #[instrument(fields(path = %path.display()))]
    pub fn from_file(path: &Path) -> EulerResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::ProblemLoadFailed {
                source_name: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        Self::from_json_str(&json, &path.display().to_string())
    }
}

impl ProblemStore for InMemoryProblemStore {
    fn get(&self, id: i64) -> Option<Problem> {
        if id < 1 {
            return None;
        }
        let index = usize::try_from(id - 1).ok()?;
        self.problems.get(index).cloned()
    }

    fn list(&self) -> Vec<Problem> {
        self.problems.clone()
    }

    fn len(&self) -> usize {
        self.problems.len()
    }
}
