//! Process Supervisor
//! Starts the server process, tracks its exit and forwards console commands
//!
//! All mutable state sits behind one async mutex. The exit waiter spawned by
//! `start` takes the same lock when the process ends, so `status` and
//! `submit_command` see the running flag as of the last observed exit.

use crate::domain::{
    CommandInput, DomainError, LaunchSpec, LogSink, ProcessLauncher, ProcessStatus, Result,
};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

#[derive(Default)]
struct SupervisorState {
    running: bool,
    pid: Option<u32>,
    last_error: Option<DomainError>,
    stdin: Option<CommandInput>,
    launches: u64,
}

pub struct ProcessSupervisor {
    launcher: Arc<dyn ProcessLauncher>,
    spec: LaunchSpec,
    output: LogSink,
    state: Arc<Mutex<SupervisorState>>,
}

impl ProcessSupervisor {
    pub fn new(launcher: Arc<dyn ProcessLauncher>, spec: LaunchSpec, output: LogSink) -> Self {
        Self {
            launcher,
            spec,
            output,
            state: Arc::new(Mutex::new(SupervisorState::default())),
        }
    }

    /// Sink receiving the process's stdout
    pub fn logs(&self) -> &LogSink {
        &self.output
    }

    /// Launch the server unless it is already running
    ///
    /// On success a detached task waits for the process to exit, then clears
    /// the running flag and records the exit error (if any).
    pub async fn start(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.running {
            warn!("Start requested while server is running");
            return Err(DomainError::AlreadyRunning);
        }

        info!(
            command = %self.spec.display_command(),
            working_dir = ?self.spec.working_dir,
            "Starting server"
        );

        let launched = match self.launcher.launch(&self.spec, self.output.clone()).await {
            Ok(launched) => launched,
            Err(e) => {
                error!(error = %e, "Failed to start server");
                state.last_error = Some(e.clone());
                return Err(e);
            }
        };

        state.running = true;
        state.pid = launched.pid;
        state.stdin = Some(launched.stdin);
        state.launches += 1;

        let pid = launched.pid;
        let exit_handle = launched.exit_handle;
        let shared = Arc::clone(&self.state);
        tokio::spawn(async move {
            let outcome = exit_handle.await;

            let mut state = shared.lock().await;
            state.running = false;
            state.pid = None;
            match outcome {
                Ok(()) => {
                    info!(pid = ?pid, "Server exited");
                    state.last_error = None;
                }
                Err(e) => {
                    warn!(pid = ?pid, error = %e, "Server exited abnormally");
                    state.last_error = Some(e);
                }
            }
        });

        info!(pid = ?pid, launches = state.launches, "Server started");
        Ok(())
    }

    /// Write `text` plus a newline to the server's stdin
    ///
    /// The lock is held for the duration of the write so commands from
    /// concurrent requests are never interleaved.
    pub async fn submit_command(&self, text: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        if !state.running {
            return Err(DomainError::WriteFailure(
                "server is not running".to_string(),
            ));
        }
        let stdin = state.stdin.as_mut().ok_or_else(|| {
            DomainError::WriteFailure("server stdin is not available".to_string())
        })?;

        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');

        stdin
            .write_all(line.as_bytes())
            .await
            .map_err(|e| DomainError::WriteFailure(e.to_string()))?;
        stdin
            .flush()
            .await
            .map_err(|e| DomainError::WriteFailure(e.to_string()))?;

        debug!(command = %text, "Command sent to server");
        Ok(())
    }

    pub async fn status(&self) -> ProcessStatus {
        let state = self.state.lock().await;
        ProcessStatus {
            running: state.running,
            pid: state.pid,
            last_error: state.last_error.as_ref().map(ToString::to_string),
            launches: state.launches,
        }
    }

    /// Error recorded by the last failed launch or run
    pub async fn last_error(&self) -> Option<DomainError> {
        self.state.lock().await.last_error.clone()
    }
}
