//! Implementation of the `easyeuler create` command.

use tracing::{debug, instrument};

use easyeuler_adapters::{LocalFilesystem, SimpleRenderer};
use easyeuler_core::{
    application::{CreateService, ProblemService},
    error::EulerError,
};

use crate::{
    cli::CreateArgs,
    commands::{ask_overwrite, can_prompt, load_problems, lookup_problem, template_store},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write the solution file for a problem.
///
/// 1. Resolve the problem and language (default from `defaults.language`)
/// 2. Pick the path (`--path` or `euler_<id>.<extension>`)
/// 3. Ask before replacing an existing file unless `--force`; refuse when
///    there is no terminal to ask on
/// 4. Render the language template and write it
#[instrument(skip_all, fields(problem = %args.problem))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let problems = ProblemService::new(Box::new(load_problems(&config)?));
    let problem = lookup_problem(&problems, &args.problem)?;

    let registry = config
        .language_registry()
        .with_cli_context(|| "languages")?;
    let name = args
        .language
        .as_deref()
        .unwrap_or(config.defaults.language.as_str());
    let language = registry.require(name).map_err(EulerError::from)?;
    debug!(language = %language, template = language.template_name(), "Language resolved");

    let service = CreateService::new(
        Box::new(template_store(&config)),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let path = args
        .path
        .unwrap_or_else(|| CreateService::default_path(&problem, language));

    // Without --force or a terminal to ask on, `create` refuses below with
    // FileExists.
    let mut overwrite = args.force;
    if !overwrite && service.exists(&path) && can_prompt() {
        if !ask_overwrite(&path)? {
            debug!(path = %path.display(), "Overwrite declined");
            return Ok(());
        }
        overwrite = true;
    }

    service.create(&problem, language, &path, overwrite)?;
    output.success(&format!("Written to {}", path.display()))?;

    Ok(())
}
