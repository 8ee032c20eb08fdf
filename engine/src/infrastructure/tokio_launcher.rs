//! Tokio Process Launcher
//! Real implementation of ProcessLauncher port using tokio
//!
//! stdout is pumped into the dashboard's log sink, stderr is collected
//! separately and only surfaces as part of an abnormal exit.

use crate::domain::{
    ports::{LaunchSpec, LaunchedProcess, ProcessExitHandle, ProcessLauncher},
    DomainError, LogSink, Result,
};
use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Tokio-based process launcher
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioProcessLauncher;

impl TokioProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    fn build_command(spec: &LaunchSpec) -> Command {
        let mut cmd = Command::new(&spec.command);
        cmd.args(&spec.args);

        if let Some(ref dir) = spec.working_dir {
            debug!(working_dir = %dir.display(), "Setting working directory");
            cmd.current_dir(dir);
        }

        if !spec.env_vars.is_empty() {
            debug!(count = spec.env_vars.len(), "Setting environment variables");
            cmd.envs(spec.env_vars.iter().map(|(k, v)| (k, v)));
        }

        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd
    }

    /// Wait for the child, then for its output to be fully captured
    fn create_exit_handle(
        mut child: Child,
        stdout_pump: JoinHandle<()>,
        stderr_collector: JoinHandle<Vec<u8>>,
    ) -> ProcessExitHandle {
        let pid = child.id();
        Box::pin(async move {
            let status = child.wait().await;

            if let Err(e) = stdout_pump.await {
                error!(error = %e, "stdout pump task panicked");
            }
            let stderr = stderr_collector.await.unwrap_or_else(|e| {
                error!(error = %e, "stderr collector task panicked");
                Vec::new()
            });

            match status {
                Ok(status) => {
                    debug!(pid = ?pid, status = %status, "Process exited");
                    exit_outcome(status, &stderr)
                }
                Err(e) => {
                    error!(pid = ?pid, error = %e, "Failed to wait for process");
                    Err(DomainError::WaitFailure(e.to_string()))
                }
            }
        })
    }
}

#[async_trait]
impl ProcessLauncher for TokioProcessLauncher {
    async fn launch(
        &self,
        spec: &LaunchSpec,
        output: LogSink,
    ) -> Result<LaunchedProcess> {
        info!(
            command = %spec.command,
            args = ?spec.args,
            "Spawning process"
        );

        if spec.command.is_empty() {
            return Err(DomainError::LaunchFailure("empty command".to_string()));
        }

        let mut child = Self::build_command(spec).spawn().map_err(|e| {
            error!(
                command = %spec.command,
                error = %e,
                "Failed to spawn process"
            );
            DomainError::LaunchFailure(e.to_string())
        })?;

        let pid = child.id();
        let (stdin, stdout, stderr) = match (
            child.stdin.take(),
            child.stdout.take(),
            child.stderr.take(),
        ) {
            (Some(stdin), Some(stdout), Some(stderr)) => (stdin, stdout, stderr),
            _ => {
                // Only reachable if the Stdio configuration above changes.
                let _ = child.start_kill();
                return Err(DomainError::LaunchFailure(
                    "process stdio was not captured".to_string(),
                ));
            }
        };

        let stdout_pump = tokio::spawn(async move {
            if let Err(e) = output.pump(stdout).await {
                warn!(error = %e, "Failed to read process stdout");
            }
        });
        let stderr_collector = tokio::spawn(collect(stderr));

        info!(pid = ?pid, "Process spawned successfully");

        Ok(LaunchedProcess {
            pid,
            stdin: Box::new(stdin),
            exit_handle: Self::create_exit_handle(child, stdout_pump, stderr_collector),
        })
    }
}

async fn collect<R: AsyncRead + Unpin>(mut reader: R) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Err(e) = reader.read_to_end(&mut buf).await {
        warn!(error = %e, "Failed to read process stderr");
    }
    buf
}

fn exit_outcome(status: ExitStatus, stderr: &[u8]) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    Err(DomainError::AbnormalExit {
        code: status.code(),
        stderr: String::from_utf8_lossy(stderr).into_owned(),
    })
}

// ============================================================================
// Tests
// ============================================================================
