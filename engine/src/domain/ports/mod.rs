pub mod mock_launcher;
pub mod process_launcher;

pub use mock_launcher::{MockLauncher, MockProcess};
pub use process_launcher::{
    CommandInput, LaunchSpec, LaunchedProcess, ProcessExitHandle, ProcessLauncher,
};
