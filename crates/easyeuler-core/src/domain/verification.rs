//! Verification data: stages, captured process output and the final result.

use std::fmt;

use serde::Serialize;

use crate::domain::duration::{MicroSign, format_duration_with};

/// One optional shell step in verifying a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Build,
    Execute,
    Cleanup,
}

impl Stage {
    /// Pipeline order.
    pub const ALL: [Stage; 3] = [Stage::Build, Stage::Execute, Stage::Cleanup];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Execute => "execute",
            Self::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate CPU time consumed by child processes, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CpuTime {
    pub user: f64,
    pub system: f64,
}

impl CpuTime {
    pub fn total(&self) -> f64 {
        self.user + self.system
    }
}

/// Raw timing of one process run, in seconds.
///
/// `cpu` is `None` on platforms without child resource accounting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExecutionTime {
    pub wall: f64,
    pub cpu: Option<CpuTime>,
}

impl ExecutionTime {
    pub fn wall_only(wall: f64) -> Self {
        Self { wall, cpu: None }
    }

    /// Labelled, formatted durations: `user`, `system`, `total`, `wall`, or
    /// just `wall` when CPU times are unavailable.
    pub fn labels(&self, micro: MicroSign) -> Vec<(&'static str, String)> {
        let mut labels = Vec::with_capacity(4);
        if let Some(cpu) = self.cpu {
            labels.push(("user", format_duration_with(cpu.user, micro)));
            labels.push(("system", format_duration_with(cpu.system, micro)));
            labels.push(("total", format_duration_with(cpu.total(), micro)));
        }
        labels.push(("wall", format_duration_with(self.wall, micro)));
        labels
    }
}

/// What a process runner captured from one command.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub duration: Option<ExecutionTime>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// The recorded outcome of one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageOutput {
    /// Stdout (one trailing newline stripped) on success, stderr on failure.
    pub output: String,
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<ExecutionTime>,
}

impl StageOutput {
    /// Classify a finished process. Any nonzero exit is a failure.
    pub fn from_process(process: ProcessOutput) -> Self {
        if process.success() {
            Self {
                output: strip_trailing_newline(&process.stdout).to_string(),
                failed: false,
                execution_time: process.duration,
            }
        } else {
            Self {
                output: process.stderr,
                failed: true,
                execution_time: process.duration,
            }
        }
    }

    /// A stage whose process could not be started at all.
    pub fn spawn_failure(reason: impl Into<String>) -> Self {
        Self {
            output: reason.into(),
            failed: true,
            execution_time: None,
        }
    }
}

/// Remove a single trailing `\n` (or `\r\n`).
pub fn strip_trailing_newline(s: &str) -> &str {
    match s.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => s,
    }
}

/// Classification of one verified file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    Error(Stage),
}

/// Summary of one pipeline run. Built fresh per file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerificationResult {
    /// The stage that failed, if any.
    pub error: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<StageOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute: Option<StageOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup: Option<StageOutput>,
    /// Only meaningful when `error` is `None`.
    pub correct: bool,
}

impl VerificationResult {
    pub fn stage(&self, stage: Stage) -> Option<&StageOutput> {
        match stage {
            Stage::Build => self.build.as_ref(),
            Stage::Execute => self.execute.as_ref(),
            Stage::Cleanup => self.cleanup.as_ref(),
        }
    }

    pub(crate) fn record(&mut self, stage: Stage, output: StageOutput) {
        let slot = match stage {
            Stage::Build => &mut self.build,
            Stage::Execute => &mut self.execute,
            Stage::Cleanup => &mut self.cleanup,
        };
        *slot = Some(output);
    }

    /// Stages that actually ran, in order.
    pub fn stages_run(&self) -> Vec<Stage> {
        Stage::ALL
            .into_iter()
            .filter(|s| self.stage(*s).is_some())
            .collect()
    }

    pub fn verdict(&self) -> Verdict {
        match self.error {
            Some(stage) => Verdict::Error(stage),
            None if self.correct => Verdict::Correct,
            None => Verdict::Incorrect,
        }
    }

    /// Diagnostic output of the failed stage.
    pub fn error_output(&self) -> Option<&str> {
        let stage = self.error?;
        self.stage(stage).map(|s| s.output.as_str())
    }

    /// Timing of the Execute stage, when it was measured.
    pub fn execution_time(&self) -> Option<&ExecutionTime> {
        self.execute.as_ref()?.execution_time.as_ref()
    }
}
