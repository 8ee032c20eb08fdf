//! Mock launcher implementation for testing
//! Simulated processes whose stdin, output and exit are driven by the test

use crate::domain::{DomainError, LogSink, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, BufReader, DuplexStream};
use tokio::sync::oneshot;

use super::{LaunchSpec, LaunchedProcess, ProcessLauncher};

const STDIN_CAPACITY: usize = 64 * 1024;
const FIRST_PID: u32 = 4242;

/// In-memory launcher producing [`MockProcess`]es
#[derive(Clone, Default)]
pub struct MockLauncher {
    state: Arc<Mutex<MockLauncherState>>,
}

#[derive(Default)]
struct MockLauncherState {
    pending: VecDeque<MockProcess>,
    specs: Vec<LaunchSpec>,
    fail_next: Option<String>,
}

/// Test-side handle of one simulated process
pub struct MockProcess {
    pub pid: u32,
    output: LogSink,
    stdin: Option<BufReader<DuplexStream>>,
    exit_tx: oneshot::Sender<Result<()>>,
}

impl MockLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next launch fail with `LaunchFailure(reason)`
    pub fn fail_next_launch(&self, reason: impl Into<String>) {
        self.state.lock().unwrap().fail_next = Some(reason.into());
    }

    /// Number of successful launches so far
    pub fn launch_count(&self) -> usize {
        self.state.lock().unwrap().specs.len()
    }

    pub fn last_spec(&self) -> Option<LaunchSpec> {
        self.state.lock().unwrap().specs.last().cloned()
    }

    /// Oldest launched process not yet handed to the test
    pub fn take_process(&self) -> Option<MockProcess> {
        self.state.lock().unwrap().pending.pop_front()
    }
}

#[async_trait]
impl ProcessLauncher for MockLauncher {
    async fn launch(
        &self,
        spec: &LaunchSpec,
        output: LogSink,
    ) -> Result<LaunchedProcess> {
        let mut state = self.state.lock().unwrap();
        if let Some(reason) = state.fail_next.take() {
            return Err(DomainError::LaunchFailure(reason));
        }

        let pid = FIRST_PID + state.specs.len() as u32;
        let (stdin_writer, stdin_reader) = tokio::io::duplex(STDIN_CAPACITY);
        let (exit_tx, exit_rx) = oneshot::channel();

        state.specs.push(spec.clone());
        state.pending.push_back(MockProcess {
            pid,
            output,
            stdin: Some(BufReader::new(stdin_reader)),
            exit_tx,
        });

        let exit_handle = async move {
            exit_rx.await.unwrap_or_else(|_| {
                Err(DomainError::WaitFailure(
                    "mock process dropped without exiting".to_string(),
                ))
            })
        };

        Ok(LaunchedProcess {
            pid: Some(pid),
            stdin: Box::new(stdin_writer),
            exit_handle: Box::pin(exit_handle),
        })
    }
}

impl MockProcess {
    /// Simulate the process printing to stdout
    pub fn emit(&self, bytes: &[u8]) {
        self.output.write(bytes);
    }

    /// Next line the supervisor wrote to stdin, terminator included
    ///
    /// Returns an empty string once stdin is closed.
    pub async fn read_line(&mut self) -> String {
        let mut line = String::new();
        if let Some(stdin) = self.stdin.as_mut() {
            stdin
                .read_line(&mut line)
                .await
                .expect("mock stdin is valid UTF-8");
        }
        line
    }

    /// Close the read end of stdin while the process keeps running
    ///
    /// Later writes from the supervisor fail with a broken pipe.
    pub fn close_stdin(&mut self) {
        self.stdin = None;
    }

    /// Finish the process with `outcome`; its stdin closes
    pub fn exit(self, outcome: Result<()>) {
        let _ = self.exit_tx.send(outcome);
    }

    pub fn exit_cleanly(self) {
        self.exit(Ok(()));
    }

    pub fn crash(self, code: i32, stderr: &str) {
        self.exit(Err(DomainError::AbnormalExit {
            code: Some(code),
            stderr: stderr.to_string(),
        }));
    }
}
