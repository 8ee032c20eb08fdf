//! Daemon configuration from environment variables
//!
//! All configuration is read from environment variables with defaults that
//! reproduce the stock server launch.

use mcd_engine::constants::{http, server};
use mcd_engine::domain::LaunchSpec;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_AUTO_START: bool = true;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Daemon configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// Address the HTTP front binds to
    pub bind_host: String,

    /// HTTP port
    pub port: u16,

    /// Working directory of the server process
    pub server_dir: PathBuf,

    /// Server executable
    pub server_command: String,

    /// Server arguments
    pub server_args: Vec<String>,

    /// Start the server before accepting requests
    pub auto_start: bool,

    /// Log level
    pub log_level: String,
}

impl DaemonConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_host: env::var("MCD_BIND_HOST")
                .unwrap_or_else(|_| http::DEFAULT_BIND_HOST.to_string()),
            port: Self::parse_u16("MCD_PORT").unwrap_or(http::DEFAULT_PORT),
            server_dir: env::var("MCD_SERVER_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(server::DEFAULT_WORKING_DIR)),
            server_command: env::var("MCD_SERVER_COMMAND")
                .unwrap_or_else(|_| server::DEFAULT_COMMAND.to_string()),
            server_args: Self::parse_args(),
            auto_start: Self::parse_bool("MCD_AUTO_START", DEFAULT_AUTO_START),
            log_level: Self::parse_log_level(),
        }
    }

    fn parse_u16(var_name: &str) -> Option<u16> {
        env::var(var_name).ok().and_then(|s| s.parse().ok())
    }

    fn parse_bool(var_name: &str, default: bool) -> bool {
        env::var(var_name)
            .ok()
            .and_then(|s| match s.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(true),
                "false" | "0" | "no" | "off" => Some(false),
                _ => None,
            })
            .unwrap_or(default)
    }

    // An empty value means "no arguments"
    fn parse_args() -> Vec<String> {
        match env::var("MCD_SERVER_ARGS") {
            Ok(s) => s.split_whitespace().map(str::to_string).collect(),
            Err(_) => server::DEFAULT_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn parse_log_level() -> String {
        // Priority: MCD_LOG_LEVEL > RUST_LOG > default
        env::var("MCD_LOG_LEVEL")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Socket address the HTTP front listens on
    pub fn listen_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .bind_host
            .parse()
            .map_err(|e| format!("Invalid MCD_BIND_HOST '{}': {}", self.bind_host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Launch description for the supervised server
    pub fn launch_spec(&self) -> LaunchSpec {
        LaunchSpec::new(self.server_command.clone())
            .args(self.server_args.clone())
            .working_dir(self.server_dir.clone())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server_command.trim().is_empty() {
            return Err("MCD_SERVER_COMMAND must not be empty".to_string());
        }
        self.listen_addr()?;
        Ok(())
    }
}
