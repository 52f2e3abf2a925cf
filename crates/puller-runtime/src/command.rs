//! Tokio-backed command runner.
//!
//! Spawns the process without a shell, captures stdout/stderr, and bounds
//! the whole run by a timeout. Children are killed when the timeout fires
//! or the run future is dropped.

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use puller_core::ports::{CommandOutput, CommandRunner, CommandSpec, ProcessError};
use tokio::process::Command;
use tracing::{debug, warn};

/// [`CommandRunner`] over `tokio::process`.
#[derive(Debug, Clone)]
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    /// Create a runner that gives each process at most `timeout`.
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The per-process timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn build_command(spec: &CommandSpec) -> Command {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(dir) = &spec.current_dir {
        cmd.current_dir(dir);
    }

    cmd
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, spec: CommandSpec) -> Result<CommandOutput, ProcessError> {
        let program = spec.display_program();
        let started = Instant::now();

        let child = build_command(&spec)
            .spawn()
            .map_err(|e| ProcessError::SpawnFailed {
                program: program.clone(),
                message: e.to_string(),
            })?;

        debug!(
            target: "puller.process",
            program = %program,
            args = ?spec.args,
            cwd = ?spec.current_dir,
            pid = ?child.id(),
            "Spawned command"
        );

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| ProcessError::Io(e.to_string()))?,
            Err(_) => {
                warn!(
                    target: "puller.process",
                    program = %program,
                    timeout_secs = self.timeout.as_secs(),
                    "Command timed out, killing"
                );
                return Err(ProcessError::TimedOut {
                    program,
                    timeout: self.timeout,
                });
            }
        };

        debug!(
            target: "puller.process",
            program = %program,
            code = ?output.status.code(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Command finished"
        );

        Ok(CommandOutput {
            code: output.status.code(),
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
