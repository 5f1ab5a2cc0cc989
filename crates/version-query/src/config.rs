//! Server configuration management.
//!
//! Configuration is loaded from CLI arguments with environment variable
//! fallbacks (`VERSION_QUERY_HTTP_BIND`, `VERSION_QUERY_STATIC_DIR`) and
//! default values.
//!
//! # Example
//!
//! ```no_run
//! use version_query::ServerConfig;
//!
//! let config = ServerConfig::from_args();
//! config.validate().expect("Invalid configuration");
//!
//! println!("HTTP server will bind to: {}", config.http_bind);
//! println!("Serving versions from: {}", config.static_dir.display());
//! ```

use crate::error::ConfigError;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "version-query",
    about = "Reports the latest beta and release builds found in a static directory",
    version
)]
pub struct ServerConfig {
    /// HTTP bind address
    #[arg(
        long,
        env = "VERSION_QUERY_HTTP_BIND",
        default_value = "0.0.0.0:8080"
    )]
    pub http_bind: SocketAddr,

    /// Directory holding the versioned build files
    #[arg(long, env = "VERSION_QUERY_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Validate configuration.
    ///
    /// A missing static directory is accepted: it is listed on every request
    /// and may appear later.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the static path exists but is not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.static_dir.exists() {
            tracing::warn!(
                "Static directory {} does not exist, version queries will fail until it is created",
                self.static_dir.display()
            );
            return Ok(());
        }

        if !self.static_dir.is_dir() {
            return Err(ConfigError::NotADirectory(self.static_dir.clone()));
        }

        Ok(())
    }
}
