//! Dashboard
//! Composition root shared by every HTTP handler

use crate::application::ProcessSupervisor;
use crate::domain::{LaunchSpec, LogSink, ProcessLauncher};
use std::sync::Arc;

/// One supervised server and its captured output
pub struct Dashboard {
    supervisor: ProcessSupervisor,
}

impl Dashboard {
    /// Wire a fresh log sink and supervisor around `launcher`
    pub fn new(launcher: Arc<dyn ProcessLauncher>, spec: LaunchSpec) -> Self {
        let logs = LogSink::new();
        Self {
            supervisor: ProcessSupervisor::new(launcher, spec, logs),
        }
    }

    pub fn supervisor(&self) -> &ProcessSupervisor {
        &self.supervisor
    }

    pub fn logs(&self) -> &LogSink {
        self.supervisor.logs()
    }
}
