//! Error types for the version query server.
//!
//! All errors use thiserror for consistent error handling across the codebase.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while listing the static directory.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The directory could not be opened
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        /// Directory that was listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An entry could not be read while iterating the directory
    #[error("Failed to read entry in {path}: {source}")]
    ReadEntry {
        /// Directory that was listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Static path exists but is not a directory
    #[error("Static path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Server runtime errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind HTTP server
    #[error("Failed to bind HTTP server to {addr}: {source}")]
    HttpBindFailed {
        /// Address that failed to bind
        addr: std::net::SocketAddr,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server shutdown error
    #[error("Server shutdown error: {0}")]
    Shutdown(String),
}
