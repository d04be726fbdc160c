//! HTTP server binary for patent claims lookup.
//!
//! Reads its TOML config from `$PATENT_CLAIMS_CONFIG`, or the platform
//! config directory, or falls back to defaults. Logs go to stderr.

use patent_claims::{ClaimsServer, ServiceConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Users can override with RUST_LOG=debug to see everything.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("patent_claims=info,patent_scrape=info")),
        )
        .init();

    let config = ServiceConfig::load()?;
    tracing::info!(base_url = %config.scrape.base_url, "patent-claims-server starting");

    let server = ClaimsServer::start(&config).await.map_err(|e| {
        tracing::error!(error = %e, "patent-claims-server failed to start");
        anyhow::anyhow!("patent-claims-server failed: {e}")
    })?;

    tokio::signal::ctrl_c().await?;
    server.shutdown();

    tracing::info!("patent-claims-server shut down cleanly");
    Ok(())
}
