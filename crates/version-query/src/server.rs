//! Server state management and orchestration.
//!
//! `AppState` carries the injected static directory and exposes the
//! list-then-select pipeline used by the HTTP handlers.

use crate::config::ServerConfig;
use crate::error::{ListingError, ServerError};
use crate::listing;
use crate::responses::VersionsDocument;
use crate::versions::{self, BuildType, LatestVersion};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared application state for HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory listed on every version query
    static_dir: PathBuf,
}

impl AppState {
    /// Create new application state from configuration.
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_static_dir(config.static_dir.clone())
    }

    /// Create application state serving the given directory.
    #[must_use]
    pub fn with_static_dir(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: static_dir.into(),
        }
    }

    /// Get the static directory.
    #[must_use]
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Find the latest file of a channel.
    ///
    /// # Errors
    ///
    /// Returns `ListingError` if the static directory cannot be listed.
    pub fn latest(&self, build_type: BuildType) -> Result<LatestVersion, ListingError> {
        let files = listing::find_channel(&self.static_dir, build_type)?;
        let latest = versions::find_latest(&files);

        tracing::debug!(
            "Selected {:?} from {} {} files",
            latest.file_name(),
            files.len(),
            build_type
        );

        Ok(latest)
    }

    /// Build the versions document for both channels.
    ///
    /// # Errors
    ///
    /// Returns `ListingError` if the static directory cannot be listed.
    pub fn versions_document(&self) -> Result<VersionsDocument, ListingError> {
        Ok(VersionsDocument::new(
            self.latest(BuildType::Beta)?,
            self.latest(BuildType::Release)?,
        ))
    }
}

/// Server orchestration.
pub struct Server {
    /// Shared application state
    state: Arc<AppState>,
    /// Server configuration
    config: ServerConfig,
}

impl Server {
    /// Create new server with configuration.
    ///
    /// # Errors
    ///
    /// Returns `ServerError` if the configuration is invalid.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        config.validate()?;

        let state = AppState::new(&config);

        tracing::info!(
            "Server initialized for static directory {}",
            state.static_dir().display()
        );

        Ok(Self {
            state: Arc::new(state),
            config,
        })
    }

    /// Run the server until ctrl-c is received.
    ///
    /// # Errors
    ///
    /// Returns `ServerError` if binding fails or the server stops with an error.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Starting version query server");
        tracing::info!("HTTP server binding to: {}", self.config.http_bind);

        crate::http::start_server(self.config.http_bind, self.state, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {e}");
                return;
            }
            tracing::info!("Shutdown signal received, stopping server");
        })
        .await
    }
}
