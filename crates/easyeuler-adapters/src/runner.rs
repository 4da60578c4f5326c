//! Process runner that hands stage commands to the platform shell.

use std::process::{Command, Stdio};
use std::time::Instant;

use easyeuler_core::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::{CpuTime, ExecutionTime, ProcessOutput},
    error::EulerResult,
};
use tracing::{debug, instrument, trace};

/// Runs commands through `sh -c` (or `cmd /C` on Windows), blocking until
/// the child exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(line: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(line);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        }
    }
}

impl ProcessRunner for ShellRunner {
    #[instrument(skip(self))]
    fn run(&self, command: &str, measure_time: bool) -> EulerResult<ProcessOutput> {
        let cpu_before = measure_time.then(child_cpu_time).flatten();
        let started = Instant::now();

        let output = Self::command(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::SpawnFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        let wall = started.elapsed().as_secs_f64();
        let duration = measure_time.then(|| {
            let cpu = cpu_before
                .zip(child_cpu_time())
                .map(|(before, after)| CpuTime {
                    user: (after.user - before.user).max(0.0),
                    system: (after.system - before.system).max(0.0),
                });
            ExecutionTime { wall, cpu }
        });

        debug!(status = ?output.status.code(), wall, "Command finished");
        trace!(stdout_len = output.stdout.len(), stderr_len = output.stderr.len());

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
            duration,
        })
    }
}

/// Cumulative CPU time of every waited-for child of this process.
#[cfg(unix)]
fn child_cpu_time() -> Option<CpuTime> {
    use nix::sys::resource::{UsageWho, getrusage};
    use nix::sys::time::TimeVal;

    fn seconds(tv: TimeVal) -> f64 {
        tv.tv_sec() as f64 + tv.tv_usec() as f64 / 1_000_000.0
    }

    let usage = getrusage(UsageWho::RUSAGE_CHILDREN).ok()?;
    Some(CpuTime {
        user: seconds(usage.user_time()),
        system: seconds(usage.system_time()),
    })
}

#[cfg(not(unix))]
fn child_cpu_time() -> Option<CpuTime> {
    None
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_and_exit_code() {
        let out = ShellRunner::new().run("echo hello", false).unwrap();
        assert_eq!(out.stdout, "hello\n");
        assert!(out.success());
        assert!(out.duration.is_none());
    }

    #[test]
    fn nonzero_exit_is_not_an_error() {
        let out = ShellRunner::new().run("echo oops >&2; exit 3", false).unwrap();
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.stderr, "oops\n");
    }

    #[test]
    fn measured_run_reports_cpu_times() {
        let out = ShellRunner::new().run("true", true).unwrap();
        let duration = out.duration.unwrap();
        assert!(duration.wall >= 0.0);
        let cpu = duration.cpu.unwrap();
        assert!(cpu.user >= 0.0 && cpu.system >= 0.0);
    }

    #[test]
    fn stdin_is_closed() {
        let out = ShellRunner::new().run("cat", false).unwrap();
        assert_eq!(out.stdout, "");
        assert!(out.success());
    }
}
