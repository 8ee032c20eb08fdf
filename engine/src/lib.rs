//! Game Server Dashboard Engine
//!
//! A library for supervising a single long-running game server process:
//! - Process start and exit tracking
//! - In-memory capture of the server console output
//! - Command submission to the server console over HTTP

pub mod constants;

// Core architecture modules
pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{Dashboard, ProcessSupervisor};
pub use domain::{DomainError, LogSink, ProcessStatus, Result};
