//! Implementation of the `easyeuler show` command.

use easyeuler_adapters::SimpleRenderer;
use easyeuler_core::application::ProblemService;

use crate::{
    cli::ShowArgs,
    commands::{ProblemSummary, load_problems, lookup_problem, template_store},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Render the `description` template for one problem.
pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = ProblemService::new(Box::new(load_problems(&config)?));
    let problem = lookup_problem(&service, &args.problem)?;

    if output.is_json() {
        output.json(&ProblemSummary::new(&problem, true))?;
        return Ok(());
    }

    let description = service.describe(&problem, &template_store(&config), &SimpleRenderer::new())?;
    output.result(description.trim_end())?;
    Ok(())
}
