//! Implementation of the `easyeuler list` command.

use easyeuler_core::{
    application::{ProblemService, services::list_entry},
    domain::Problem,
};

use crate::{
    cli::{ListArgs, ListFormat},
    commands::{ProblemSummary, load_problems},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = ProblemService::new(Box::new(load_problems(&config)?));
    let problems = service.list(args.sort.into());

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::List => {
            let entries: Vec<String> = problems.iter().map(|p| list_entry(p, args.long)).collect();
            output.result(&entries.join("\n"))?;
        }

        ListFormat::Table => {
            output.header(&format!("{:>4}  {:>10}  {}", "ID", "Difficulty", "Name"))?;
            for p in &problems {
                output.result(&table_row(p))?;
            }
        }

        ListFormat::Json => {
            let summaries: Vec<ProblemSummary<'_>> = problems
                .iter()
                .map(|p| ProblemSummary::new(p, args.long))
                .collect();
            output.json(&summaries)?;
        }

        ListFormat::Csv => {
            output.result("id,difficulty,name")?;
            for p in &problems {
                output.result(&format!("{},{},{}", p.id, p.difficulty.value(), csv_field(&p.name)))?;
            }
        }
    }

    Ok(())
}

fn table_row(problem: &Problem) -> String {
    format!(
        "{:>4}  {:>10}  {}",
        problem.id,
        problem.difficulty.to_string(),
        problem.name
    )
}

/// Quote a CSV field when it contains a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(csv_field("Names scores"), "Names scores");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
