// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside service results)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid problem data: {0}")]
    InvalidProblemData(String),

    #[error("Invalid language '{name}': {reason}")]
    InvalidLanguage { name: String, reason: String },

    #[error("Difficulty {value} is outside 0-100")]
    DifficultyOutOfRange { value: i64 },

    #[error("'{value}' is not a valid integer")]
    InvalidProblemId { value: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("A problem with ID {id} does not exist")]
    ProblemNotFound { id: i64 },

    #[error("Unknown language '{name}'")]
    UnknownLanguage { name: String, available: Vec<String> },

    #[error("Problem {id} has no resource files")]
    NoResources { id: u32 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProblemData(msg) => vec![
                format!("Details: {msg}"),
                "Problem records must be ordered so that record N has id N".into(),
            ],
            Self::InvalidProblemId { .. } => vec!["Problem IDs are positive integers".into()],
            Self::ProblemNotFound { .. } => vec![
                "List the available problems: easyeuler list".into(),
                "Point data.problems at a larger problem set in your config".into(),
            ],
            Self::UnknownLanguage { available, .. } => {
                let mut suggestions = vec!["Configured languages:".to_string()];
                for name in available {
                    suggestions.push(format!("  • {name}"));
                }
                suggestions.push("Add a [languages.<name>] table to your config".into());
                suggestions
            }
            Self::NoResources { id } => vec![
                format!("Problem {id} does not reference any data files"),
                "Run without a problem ID to copy every resource".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProblemId { .. } | Self::DifficultyOutOfRange { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidProblemData(_) | Self::InvalidLanguage { .. } => {
                ErrorCategory::Configuration
            }
            Self::ProblemNotFound { .. } | Self::UnknownLanguage { .. } => {
                ErrorCategory::Validation
            }
            Self::NoResources { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
