//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `easyeuler-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{Problem, ProcessOutput, RenderContext, Template};
use crate::error::EulerResult;

/// Port for read-only problem lookup.
///
/// Implemented by:
/// - `easyeuler_adapters::InMemoryProblemStore` (built-in or JSON file data)
#[cfg_attr(test, mockall::automock)]
pub trait ProblemStore: Send + Sync {
    /// The problem with this 1-based ID.
    ///
    /// `None` for every `id` outside `1..=len()`, negative values included.
    fn get(&self, id: i64) -> Option<Problem>;

    /// All problems in ID order.
    fn list(&self) -> Vec<Problem>;

    /// Number of problems.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Port for running one shell command.
///
/// Implemented by:
/// - `easyeuler_adapters::ShellRunner` (`sh -c` / `cmd /C`)
///
/// ## Contract
///
/// - A nonzero exit status is reported in [`ProcessOutput::exit_code`],
///   never as an `Err`. Only failing to start the shell is an error.
/// - With `measure_time`, wall time is always measured; CPU times only
///   where the platform exposes child accounting.
/// - Blocks until the child exits. No timeout.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn run(&self, command: &str, measure_time: bool) -> EulerResult<ProcessOutput>;
}

/// Port for template lookup by name.
///
/// Implemented by:
/// - `easyeuler_adapters::LayeredTemplateStore` (user dirs over built-ins)
pub trait TemplateStore: Send + Sync {
    fn get(&self, name: &str) -> EulerResult<Template>;

    /// Names of every template that can be resolved.
    fn names(&self) -> Vec<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `easyeuler_adapters::SimpleRenderer` (variable substitution)
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &Template, context: &RenderContext) -> EulerResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `easyeuler_adapters::LocalFilesystem` (production)
/// - `easyeuler_adapters::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> EulerResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> EulerResult<()>;

    /// Copy a file.
    fn copy_file(&self, from: &Path, to: &Path) -> EulerResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// File names (not paths) directly inside `path`, sorted.
    fn list_files(&self, path: &Path) -> EulerResult<Vec<String>>;

    /// Every file beneath `root`, recursively, in file-name order.
    fn walk_files(&self, root: &Path) -> EulerResult<Vec<PathBuf>>;
}
