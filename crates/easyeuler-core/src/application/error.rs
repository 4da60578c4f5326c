//! Failures of the world behind the ports: files, templates, problem data
//! and process spawning.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template with this name in any template location.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String, available: Vec<String> },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The target file exists and overwriting was not allowed.
    #[error("{path} already exists")]
    FileExists { path: PathBuf },

    /// Several resources must go to a path that is an existing file.
    #[error("{path} needs to be a directory to create multiple resource files")]
    NotADirectory { path: PathBuf },

    /// Problem data could not be loaded.
    #[error("Failed to load problems from {source_name}: {reason}")]
    ProblemLoadFailed { source_name: String, reason: String },

    /// The shell for a stage command could not be started.
    #[error("Failed to run '{command}': {reason}")]
    SpawnFailed { command: String, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name, available } => {
                let mut lines = vec![format!("No template named '{name}' was found")];
                if !available.is_empty() {
                    lines.push("Available templates:".into());
                    lines.extend(available.iter().map(|t| format!("  • {t}")));
                }
                lines.push("Add it to a directory listed in templates.paths".into());
                lines.push("Or set `template = \"...\"` on the language in your config".into());
                lines
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::FileExists { path } => vec![
                format!("'{}' already exists", path.display()),
                "Use --force to overwrite".into(),
                "Or choose another location with --path".into(),
            ],
            Self::NotADirectory { path } => vec![
                format!("'{}' is a file", path.display()),
                "Pass a directory (new or existing) with --path".into(),
            ],
            Self::ProblemLoadFailed { source_name, .. } => vec![
                format!("Check the problem file: {source_name}"),
                "Remove data.problems from your config to use the built-in set".into(),
            ],
            Self::SpawnFailed { .. } => {
                vec!["Check that a shell (sh, or cmd on Windows) is on PATH".into()]
            }
            Self::StoreLockError => vec![],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::SpawnFailed { .. } => ErrorCategory::Internal,
            Self::FileExists { .. } | Self::NotADirectory { .. } => ErrorCategory::Validation,
            Self::ProblemLoadFailed { .. } => ErrorCategory::Configuration,
        }
    }
}
