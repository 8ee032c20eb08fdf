//! ProcessLauncher port
//! Interface for starting the supervised server process

use crate::constants::server;
use crate::domain::{LogSink, Result};
use async_trait::async_trait;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use tokio::io::AsyncWrite;

/// Description of the process to launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub command: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub env_vars: Vec<(String, String)>,
}

impl Default for LaunchSpec {
    fn default() -> Self {
        Self {
            command: server::DEFAULT_COMMAND.to_string(),
            args: server::DEFAULT_ARGS.iter().map(|s| s.to_string()).collect(),
            working_dir: Some(PathBuf::from(server::DEFAULT_WORKING_DIR)),
            env_vars: Vec::new(),
        }
    }
}

impl LaunchSpec {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            working_dir: None,
            env_vars: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push((key.into(), value.into()));
        self
    }

    /// Command line for log output
    pub fn display_command(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Writable end of the process's stdin
pub type CommandInput = Box<dyn AsyncWrite + Send + Unpin>;

/// Resolves once the process has exited and its output has been captured
///
/// `Ok(())` for a clean exit, `AbnormalExit` for a non-zero status or signal,
/// `WaitFailure` if the exit could not be observed.
pub type ProcessExitHandle = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

/// A freshly started process
pub struct LaunchedProcess {
    pub pid: Option<u32>,
    pub stdin: CommandInput,
    pub exit_handle: ProcessExitHandle,
}

impl std::fmt::Debug for LaunchedProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchedProcess")
            .field("pid", &self.pid)
            .finish_non_exhaustive()
    }
}

/// Port for launching the supervised process
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Start the process described by `spec`, sending its stdout to `output`
    async fn launch(&self, spec: &LaunchSpec, output: LogSink) -> Result<LaunchedProcess>;
}
