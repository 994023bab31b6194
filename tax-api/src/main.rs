use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use tax_api::config::ServerConfig;
use tax_api::logging;
use tax_api::state::AppState;
use tax_core::TaxEngine;
use tax_data::RegimeLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    logging::init_logging(config.log_file.as_deref())?;

    let regime = RegimeLoader::resolve(config.regime.as_deref(), config.bands.as_deref())
        .context("failed to load tax regime")?;
    let engine = TaxEngine::new(regime).context("tax regime is invalid")?;
    info!(
        regime = %engine.config().name,
        tax_year = %engine.config().tax_year,
        bands = engine.config().bands.len(),
        "tax regime loaded"
    );

    let app = tax_api::app(AppState::new(engine));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "tax API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("tax API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
