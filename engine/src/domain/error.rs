//! Domain-level errors
//! Every failure the supervisor can report, either directly to a caller or
//! recorded as the last error of a finished run

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("server already running")]
    AlreadyRunning,

    #[error("failed to write command: {0}")]
    WriteFailure(String),

    #[error("failed to launch server: {0}")]
    LaunchFailure(String),

    #[error("{}", describe_exit(.code, .stderr))]
    AbnormalExit { code: Option<i32>, stderr: String },

    #[error("failed to wait for server: {0}")]
    WaitFailure(String),
}

fn describe_exit(code: &Option<i32>, stderr: &str) -> String {
    let mut msg = match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    };
    let stderr = stderr.trim_end();
    if !stderr.is_empty() {
        msg.push_str(": ");
        msg.push_str(stderr);
    }
    msg
}

pub type Result<T> = std::result::Result<T, DomainError>;
