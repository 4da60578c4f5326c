//! Implementation of the `easyeuler verify` command.
//!
//! Files are checked one at a time, in argument order; directories (with
//! `--recursive`) in file-name order. Each file's line starts printing
//! before its commands run.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use easyeuler_adapters::{LocalFilesystem, ShellRunner};
use easyeuler_core::{
    application::{VerifyService, ports::Filesystem},
    domain::{ExecutionTime, Language, MicroSign, Stage, VerificationResult, Verdict},
    error::EulerError,
};

use crate::{
    cli::VerifyArgs,
    commands::load_problems,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::{OutputManager, Tone},
};

/// Per-run options shared by every file.
struct Options<'a> {
    language: Option<&'a Language>,
    time: bool,
    errors: bool,
    micro: MicroSign,
}

/// Verify every path; succeed when at least one file was verified.
#[instrument(skip_all, fields(paths = args.paths.len()))]
pub fn execute(args: VerifyArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if let Some(missing) = args.paths.iter().find(|p| !p.exists()) {
        return Err(CliError::PathNotFound {
            path: missing.clone(),
        });
    }

    let registry = config
        .language_registry()
        .with_cli_context(|| "languages")?;
    let explicit = args
        .language
        .as_deref()
        .map(|name| registry.require(name).cloned())
        .transpose()
        .map_err(EulerError::from)?;

    let service = VerifyService::new(
        Box::new(load_problems(&config)?),
        registry,
        Box::new(ShellRunner::new()),
    );
    let filesystem = LocalFilesystem::new();

    let options = Options {
        language: explicit.as_ref(),
        time: args.time,
        errors: args.errors,
        micro: config.micro_sign(),
    };

    let mut verified = 0usize;
    for path in &args.paths {
        if !filesystem.is_dir(path) {
            verified += usize::from(verify_file(&service, path, &options, &output)?);
            continue;
        }

        if !args.recursive {
            report_skip(
                &output,
                path,
                "is a directory and --recursive was not specified",
            )?;
            continue;
        }

        for file in filesystem.walk_files(path)? {
            verified += usize::from(verify_file(&service, &file, &options, &output)?);
        }
    }

    info!(verified, "Verification finished");
    if verified == 0 {
        return Err(CliError::NothingVerified);
    }
    Ok(())
}

/// Verify one file. Returns whether it was verified rather than skipped.
fn verify_file(
    service: &VerifyService,
    path: &Path,
    options: &Options<'_>,
    output: &OutputManager,
) -> CliResult<bool> {
    let Some(job) = service.prepare(path, options.language) else {
        report_skip(output, path, "does not contain a valid problem ID")?;
        return Ok(false);
    };

    if !output.is_json() {
        output.result_inline(&format!("Checking output of {}: ", path.display()))?;
    }

    let result = service.run(&job, options.time);
    if output.is_json() {
        output.json(&FileReport::verified(path, job.problem.id, &result))?;
    } else {
        print_result(&result, options, output)?;
    }
    Ok(true)
}

fn report_skip(output: &OutputManager, path: &Path, reason: &str) -> CliResult<()> {
    if output.is_json() {
        output.json(&FileReport::skipped(path, reason))?;
    } else {
        output.result(&format!("Skipping {} because it {reason}", path.display()))?;
    }
    Ok(())
}

fn print_result(
    result: &VerificationResult,
    options: &Options<'_>,
    output: &OutputManager,
) -> CliResult<()> {
    let correct = match result.verdict() {
        Verdict::Error(stage) => {
            let message = if options.errors {
                result.error_output().unwrap_or_default().trim_end().to_string()
            } else {
                format!("[error during {stage}]")
            };
            output.result("")?;
            output.result_toned(&message, Tone::Bad)?;
            return Ok(());
        }
        Verdict::Correct => true,
        Verdict::Incorrect => false,
    };

    let stdout = result
        .stage(Stage::Execute)
        .map(|s| s.output.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("[no output]");
    output.result_toned(stdout, if correct { Tone::Good } else { Tone::Bad })?;

    if options.time {
        if let Some(time) = result.execution_time() {
            for line in timing_lines(time, options.micro) {
                output.result_toned(&line, Tone::Detail)?;
            }
        }
    }
    Ok(())
}

/// `CPU times - ...` and `Wall time: ...`, or `Time: ...` without CPU times.
fn timing_lines(time: &ExecutionTime, micro: MicroSign) -> Vec<String> {
    let labels = time.labels(micro);
    let value = |name: &str| {
        labels
            .iter()
            .find(|(label, _)| *label == name)
            .map(|(_, formatted)| formatted.as_str())
            .unwrap_or_default()
    };

    if time.cpu.is_some() {
        vec![
            format!(
                "CPU times - user: {}, system: {}, total: {}",
                value("user"),
                value("system"),
                value("total")
            ),
            format!("Wall time: {}", value("wall")),
        ]
    } else {
        vec![format!("Time: {}", value("wall"))]
    }
}

/// One line of `--output-format json`.
#[derive(Debug, Serialize)]
struct FileReport<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    problem: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a VerificationResult>,
}

impl<'a> FileReport<'a> {
    fn skipped(path: &Path, reason: &'a str) -> Self {
        Self {
            path: path.display().to_string(),
            skipped: Some(reason),
            problem: None,
            verdict: None,
            result: None,
        }
    }

    fn verified(path: &Path, problem: u32, result: &'a VerificationResult) -> Self {
        let verdict = match result.verdict() {
            Verdict::Correct => "correct",
            Verdict::Incorrect => "incorrect",
            Verdict::Error(_) => "error",
        };
        Self {
            path: path.display().to_string(),
            skipped: None,
            problem: Some(problem),
            verdict: Some(verdict),
            result: Some(result),
        }
    }
}
