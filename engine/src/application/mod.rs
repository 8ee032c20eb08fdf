//! Application Layer
//!
//! `ProcessSupervisor` owns the lifecycle of the single server process and
//! `Dashboard` is the composition root wiring it to the output sink.

pub mod dashboard;
pub mod supervisor;

pub use dashboard::Dashboard;
pub use supervisor::ProcessSupervisor;
