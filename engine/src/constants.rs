//! Application-wide constants and default values
//!
//! Centralizes the fixed launch line and daemon defaults

/// Default game server launch (mirrors the vanilla server start script)
pub mod server {
    /// Executable used to run the server
    pub const DEFAULT_COMMAND: &str = "java";

    /// Arguments passed to the executable
    pub const DEFAULT_ARGS: &[&str] = &[
        "-Xmx4G",
        "-Xms4G",
        "-jar",
        "minecraft_server.1.17.1.jar",
        "nogui",
    ];

    /// Working directory holding the server jar and world data
    pub const DEFAULT_WORKING_DIR: &str = "./mc";
}

/// HTTP front defaults
pub mod http {
    /// Address the dashboard binds to
    pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

    /// Port the dashboard listens on
    pub const DEFAULT_PORT: u16 = 8080;
}

/// Output capture tuning
pub mod output {
    /// Size of each read from the server's stdout
    pub const PUMP_CHUNK_SIZE: usize = 8 * 1024;
}
