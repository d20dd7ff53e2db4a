//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

/// Port the server listens on when `SERVER_PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Base URL advertised in the API documentation.
    pub fn server_url(&self) -> String {
        format!("http://localhost:{}", self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
        }
    }
}
