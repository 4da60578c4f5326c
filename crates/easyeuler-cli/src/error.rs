//! Errors that end the process, with the exit code and advice for each.
//!
//! Wrong answers and failing solution builds are not errors; they are
//! printed by `verify` and the run still succeeds.

use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use easyeuler_core::error::{ErrorCategory, EulerError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A path passed to `verify` does not exist.
    #[error("Path '{}' does not exist", path.display())]
    PathNotFound { path: PathBuf },

    /// Every path given to `verify` was skipped.
    #[error("No files were verified")]
    NothingVerified,

    /// The configuration cascade failed to load or is inconsistent.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    #[error("{0}")]
    Core(#[from] EulerError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathNotFound { .. } => vec![
                "Check the spelling, or create the solution first: easyeuler create <ID>".into(),
            ],
            Self::NothingVerified => vec![
                "Solution file names must contain the problem ID, e.g. euler_001.py".into(),
                "Pass --recursive to verify the files inside a directory".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Show the merged configuration with 'easyeuler config list'".into(),
                "Write a fresh default file with 'easyeuler init --force'".into(),
            ],
            Self::Core(e) => e.suggestions(),
            Self::IoError { .. } => vec!["Check the permissions of the target directory".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathNotFound { .. } | Self::NothingVerified => ErrorCategory::Validation,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(e) => e.category(),
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// 2 for bad input, 3 for a missing template, 4 for configuration,
    /// 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// The message printed to stderr. `verbose` adds the source chain and
    /// drops the hint about `-v`.
    pub fn render(&self, verbose: bool, colored: bool) -> String {
        let mut out = String::new();

        if colored {
            let _ = writeln!(out, "\n{} {}", "Error:".red().bold(), self.red());
        } else {
            let _ = writeln!(out, "\nError: {self}");
        }

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = writeln!(out, "  Caused by: {err}");
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            if colored {
                let _ = writeln!(out, "\n{}", "Suggestions:".yellow().bold());
            } else {
                out.push_str("\nSuggestions:\n");
            }
            for suggestion in suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v for more details.\n");
        }
        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::NotFound => tracing::warn!(error = %self),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self)
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "Caused by");
        }
    }
}

/// Attach a context message while converting to [`CliError`].
///
/// io errors become `IoError`; anyhow errors (from the config layer) become
/// `ConfigError`.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for anyhow::Result<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e:#}", f().into()),
            source: Some(e.into()),
        })
    }
}
