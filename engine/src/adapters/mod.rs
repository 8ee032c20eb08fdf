//! Driving Adapters Layer
//!
//! This module contains the "driving" or "primary" adapters.
//! These adapters accept external requests and translate them into calls on
//! the dashboard.
//!
//! ## Available Adapters
//!
//! - **REST**: HTML control panel over HTTP
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mcd_engine::adapters::rest::{build_router, serve_on_tcp};
//! use mcd_engine::application::Dashboard;
//! use mcd_engine::domain::LaunchSpec;
//! use mcd_engine::infrastructure::TokioProcessLauncher;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let launcher = Arc::new(TokioProcessLauncher::new());
//! let dashboard = Arc::new(Dashboard::new(launcher, LaunchSpec::default()));
//!
//! let app = build_router(dashboard);
//! serve_on_tcp("0.0.0.0:8080".parse()?, app, std::future::pending()).await?;
//! # Ok(())
//! # }
//! ```

pub mod rest;
