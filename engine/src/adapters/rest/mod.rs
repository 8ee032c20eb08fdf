//! REST API Driving Adapter
//!
//! Exposes the dashboard as a small HTML control panel

pub mod assets;
pub mod handlers;
pub mod router;
pub mod tcp;
pub mod templates;

pub use router::build_router;
pub use tcp::serve_on_tcp;
