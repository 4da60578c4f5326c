//! The error type every core operation returns.
//!
//! Subprocess failures never show up here: a failing build or a wrong
//! answer is data inside a `VerificationResult`.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum EulerError {
    /// Bad input or missing records: unknown IDs, languages, resources.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Failures behind a port: templates, files, problem data, spawning.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl EulerError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

pub type EulerResult<T> = Result<T, EulerError>;
