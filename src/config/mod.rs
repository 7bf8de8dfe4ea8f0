// SPDX-License-Identifier: MIT

//! Configuration module for the MVP webapp
//!
//! Loads configuration from environment variables.


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .unwrap_or_else(|_| defaults::SERVER_ADDR.to_string());

        Config { server_addr }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        // Address must contain a port
        if !self.server_addr.contains(':') {
            return Err(format!(
                "Invalid server address '{}': expected 'host:port'",
                self.server_addr
            ));
        }

        Ok(())
    }
}
