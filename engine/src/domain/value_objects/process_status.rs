//! ProcessStatus value object
//! Point-in-time view of the supervised process

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessStatus {
    /// Whether the process is alive, as last observed by the exit waiter
    pub running: bool,
    pub pid: Option<u32>,
    /// Error of the most recent failed launch or run, if any
    pub last_error: Option<String>,
    /// Successful launches since the dashboard started
    pub launches: u64,
}

impl ProcessStatus {
    /// Short label for display
    pub fn state_label(&self) -> &'static str {
        match (self.running, self.launches, self.last_error.is_some()) {
            (true, _, _) => "running",
            (false, 0, false) => "not started",
            (false, _, true) => "crashed",
            (false, _, false) => "stopped",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state_label())?;
        if let Some(pid) = self.pid {
            write!(f, " (pid {pid})")?;
        }
        if let Some(ref err) = self.last_error {
            write!(f, ", last error: {err}")?;
        }
        Ok(())
    }
}
