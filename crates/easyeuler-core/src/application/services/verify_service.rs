//! Verify Service - the build → execute → cleanup pipeline.
//!
//! For one solution file:
//! 1. [`VerifyService::prepare`] resolves the problem from the file name
//!    and the language (explicit, by extension, or the no-op fallback)
//! 2. [`VerifyService::run`] runs each templated stage in order, stopping
//!    at the first failure
//! 3. The Execute stage's stdout is compared to the problem's answer
//!
//! Subprocess failures are recorded in the returned
//! [`VerificationResult`]; nothing here returns an error.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{ProblemStore, ProcessRunner},
    domain::{
        Language, LanguageRegistry, Problem, Stage, StageOutput, VerificationResult,
        extract_problem_id,
    },
};

/// A solution file whose problem and language are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyJob {
    pub path: String,
    pub problem: Problem,
    pub language: Language,
}

/// Verification pipeline over injected problem, language and process ports.
pub struct VerifyService {
    problems: Box<dyn ProblemStore>,
    languages: LanguageRegistry,
    runner: Box<dyn ProcessRunner>,
}

impl VerifyService {
    pub fn new(
        problems: Box<dyn ProblemStore>,
        languages: LanguageRegistry,
        runner: Box<dyn ProcessRunner>,
    ) -> Self {
        Self {
            problems,
            languages,
            runner,
        }
    }

    /// The problem whose ID is encoded in `path`'s file name.
    fn resolve_problem(&self, path: &Path) -> Option<Problem> {
        let id = extract_problem_id(path)?;
        self.problems.get(i64::from(id))
    }

    /// `explicit` if given, else the language registered for the file's
    /// extension, else [`Language::fallback`].
    fn resolve_language(&self, path: &Path, explicit: Option<&Language>) -> Language {
        if let Some(language) = explicit {
            return language.clone();
        }

        path.extension()
            .and_then(|ext| self.languages.by_extension(&ext.to_string_lossy()))
            .cloned()
            .unwrap_or_else(|| {
                debug!(path = %path.display(), "No language for extension, using fallback");
                Language::fallback()
            })
    }

    /// Resolve `path` once. `None` means the file name has no problem ID
    /// or the ID is not in the store.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn prepare(
        &self,
        path: impl AsRef<Path>,
        explicit: Option<&Language>,
    ) -> Option<VerifyJob> {
        let path = path.as_ref();

        let Some(problem) = self.resolve_problem(path) else {
            info!("Skipping file without a valid problem ID");
            return None;
        };

        let language = self.resolve_language(path, explicit);
        info!(problem = problem.id, language = %language, "Verifying");

        Some(VerifyJob {
            path: path.to_string_lossy().into_owned(),
            problem,
            language,
        })
    }

    pub fn run(&self, job: &VerifyJob, measure_time: bool) -> VerificationResult {
        self.run_pipeline(&job.path, &job.language, &job.problem, measure_time)
    }

    /// Run Build → Execute → Cleanup for `path`.
    ///
    /// Only Execute is timed. The first stage with a nonzero exit becomes
    /// `result.error` and later stages do not run.
    fn run_pipeline(
        &self,
        path: &str,
        language: &Language,
        problem: &Problem,
        measure_time: bool,
    ) -> VerificationResult {
        let mut result = VerificationResult::default();

        for stage in Stage::ALL {
            let Some(template) = language.command(stage) else {
                continue;
            };

            let command = template.render(path);
            let timed = measure_time && stage == Stage::Execute;
            debug!(%stage, %command, timed, "Running stage");

            let output = match self.runner.run(&command, timed) {
                Ok(process) => StageOutput::from_process(process),
                Err(e) => {
                    warn!(%stage, error = %e, "Stage could not be started");
                    StageOutput::spawn_failure(e.to_string())
                }
            };

            let failed = output.failed;
            if stage == Stage::Execute && !failed {
                result.correct = output.output == problem.answer;
            }
            result.record(stage, output);

            if failed {
                debug!(%stage, "Stage failed, stopping pipeline");
                result.error = Some(stage);
                break;
            }
        }

        result
    }
}
