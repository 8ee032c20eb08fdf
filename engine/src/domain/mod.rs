pub mod error;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use error::{DomainError, Result};
pub use ports::{
    CommandInput, LaunchSpec, LaunchedProcess, MockLauncher, ProcessExitHandle, ProcessLauncher,
};
pub use services::LogSink;
pub use value_objects::ProcessStatus;
