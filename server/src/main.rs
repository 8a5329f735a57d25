use std::sync::Arc;

use anyhow::Context;
use todo_core::SqliteTodoRepository;
use todo_server::{telemetry, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    telemetry::init_tracing(config.log_format());
    if let Some(format) = config.unknown_log_format() {
        tracing::warn!(log_format = format, "unknown LOG_FORMAT, falling back to pretty");
    }
    config.validate().context("invalid configuration")?;

    let repo = SqliteTodoRepository::connect(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, database_url = %config.database_url, "listening");

    todo_server::run(listener, Arc::new(repo), shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
