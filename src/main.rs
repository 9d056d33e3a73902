//! PCOSync analysis service.
//!
//! Serves `POST /api/analyze-report`. All settings come from `PCOSYNC__*`
//! environment variables (see `pcosync::config`).

use std::error::Error;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pcosync::adapters::analysis::analyzer_from_config;
use pcosync::adapters::http::app_router;
use pcosync::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    config.validate()?;

    let analyzer = analyzer_from_config(&config.analysis)?;
    let router = config.navigation.router();
    tracing::info!(
        analyzer = analyzer.name(),
        environment = ?config.server.environment,
        navigation = ?router.variant(),
        initial_screen = %router.initial_screen(),
        "configuration loaded"
    );

    let app = app_router(analyzer, &config);
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
