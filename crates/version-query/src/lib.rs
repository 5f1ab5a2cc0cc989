//! Version query server.
//!
//! Serves the latest beta and release builds found in a static directory as
//! an XML document. File names embed a channel marker (`beta` or `release`)
//! and a dot-separated version; the latest file of a channel is the
//! lexically greatest name.
//!
//! # Architecture
//!
//! - `server`: Shared state and server orchestration
//! - `config`: Configuration loading and validation
//! - `listing`: Static directory listing filtered by channel marker
//! - `versions`: Latest version selection
//! - `responses`: XML document generation
//! - `http`: HTTP server and handlers
//!
//! # Example
//!
//! ```no_run
//! use version_query::{Server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     tracing_subscriber::fmt::init();
//!
//!     let config = ServerConfig::from_args();
//!     let server = Server::new(config)?;
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod config;
pub mod error;
pub mod http;
pub mod listing;
pub mod responses;
pub mod server;
pub mod versions;

pub use config::ServerConfig;
pub use error::{ConfigError, ListingError, ServerError};
pub use listing::{find_channel, find_versions};
pub use responses::VersionsDocument;
pub use server::{AppState, Server};
pub use versions::{BuildType, LatestVersion, find_latest};
