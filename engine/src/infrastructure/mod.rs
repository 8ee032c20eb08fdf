//! Infrastructure Layer
//!
//! Driven adapters implementing the ports defined in the domain layer.
//!
//! ## Adapters
//!
//! - `TokioProcessLauncher`: real process launching using tokio

pub mod tokio_launcher;

pub use tokio_launcher::TokioProcessLauncher;
