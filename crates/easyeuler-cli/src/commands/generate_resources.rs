//! Implementation of the `easyeuler generate-resources` command.

use tracing::instrument;

use easyeuler_adapters::{LocalFilesystem, builtin_resources};
use easyeuler_core::application::{ProblemService, ResourceService, services::ResourceOutcome};

use crate::{
    cli::GenerateResourcesArgs,
    commands::{confirm_overwrite, load_problems, lookup_problem},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Copy a problem's resources (or all of them) to `--path`.
#[instrument(skip_all, fields(problem = ?args.problem, path = %args.path.display()))]
pub fn execute(
    args: GenerateResourcesArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let problem = match &args.problem {
        Some(raw) => {
            let problems = ProblemService::new(Box::new(load_problems(&config)?));
            Some(lookup_problem(&problems, raw)?)
        }
        None => None,
    };

    let service = ResourceService::new(Box::new(LocalFilesystem::new()), config.resources_dir())
        .with_bundled(builtin_resources::all());
    let resources = service.resources_for(problem.as_ref())?;

    let mut prompt_error: Option<CliError> = None;
    let outcomes = service.generate(&resources, &args.path, &mut |target| {
        match confirm_overwrite(target, args.force) {
            Ok(answer) => answer,
            Err(e) => {
                prompt_error.get_or_insert(e);
                false
            }
        }
    })?;

    if let Some(e) = prompt_error {
        return Err(e);
    }

    for outcome in outcomes {
        match outcome {
            ResourceOutcome::Created { name, .. } => {
                output.success(&format!("Created {name} at path {}", args.path.display()))?;
            }
            ResourceOutcome::Skipped { name, path } => {
                output.warning(&format!("Skipped {name}, {} already exists", path.display()))?;
            }
        }
    }

    Ok(())
}
