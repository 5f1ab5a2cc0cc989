//! Version query server binary entry point.
//!
//! Initializes logging, parses configuration and runs the server until
//! ctrl-c is received.

use anyhow::Result;
use version_query::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_args();

    tracing::info!(
        "Configuration loaded: HTTP={}, static_dir={}",
        config.http_bind,
        config.static_dir.display()
    );

    let server = Server::new(config)?;
    server.run().await?;

    Ok(())
}
