//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into calls on the core services,
//! wiring in the adapters the configuration selects. No business logic
//! lives here.

pub mod completions;
pub mod config;
pub mod create;
pub mod generate_resources;
pub mod init;
pub mod list;
pub mod show;
pub mod verify;

use std::path::Path;

use easyeuler_adapters::{InMemoryProblemStore, LayeredTemplateStore};
use easyeuler_core::{
    application::ProblemService,
    domain::{Problem, parse_problem_id},
    error::EulerError,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// The configured problem set: `data.problems` if set, else the built-in one.
pub(crate) fn load_problems(config: &AppConfig) -> CliResult<InMemoryProblemStore> {
    let store = match &config.data.problems {
        Some(path) => InMemoryProblemStore::from_file(path)?,
        None => InMemoryProblemStore::builtin()?,
    };
    Ok(store)
}

/// Parse a PROBLEM argument and resolve it.
pub(crate) fn lookup_problem(service: &ProblemService, raw: &str) -> CliResult<Problem> {
    let id = parse_problem_id(raw).map_err(EulerError::from)?;
    Ok(service.get(id)?)
}

pub(crate) fn template_store(config: &AppConfig) -> LayeredTemplateStore {
    LayeredTemplateStore::new(config.template_dirs())
}

/// Whether the user can be asked a yes/no question: the `interactive`
/// feature is on and stdin is a terminal.
pub(crate) fn can_prompt() -> bool {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        std::io::stdin().is_terminal()
    }
    #[cfg(not(feature = "interactive"))]
    {
        false
    }
}

/// Ask whether an existing `path` may be replaced. Only call when
/// [`can_prompt`] is true.
#[cfg(feature = "interactive")]
pub(crate) fn ask_overwrite(path: &Path) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(format!(
            "{} already exists. Do you want to overwrite it?",
            path.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "Failed to read confirmation".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
pub(crate) fn ask_overwrite(_path: &Path) -> CliResult<bool> {
    Ok(false)
}

/// `--force`, else the user's answer, else keep the file.
pub(crate) fn confirm_overwrite(path: &Path, force: bool) -> CliResult<bool> {
    if force {
        return Ok(true);
    }
    if can_prompt() {
        return ask_overwrite(path);
    }
    debug!(path = %path.display(), "Cannot prompt, keeping existing file");
    Ok(false)
}

/// Public view of a problem. The answer is never exposed.
#[derive(Debug, Serialize)]
pub(crate) struct ProblemSummary<'a> {
    pub id: u32,
    pub name: &'a str,
    pub difficulty: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub resources: &'a [String],
}

impl<'a> ProblemSummary<'a> {
    pub fn new(problem: &'a Problem, with_description: bool) -> Self {
        Self {
            id: problem.id,
            name: &problem.name,
            difficulty: problem.difficulty.value(),
            description: with_description.then_some(problem.description.as_str()),
            resources: &problem.resources,
        }
    }
}
