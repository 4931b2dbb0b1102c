mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod quotes;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;
use store::RedisStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("quote-kv starting");

    let config = Config::parse();
    config.log_startup();

    let store = RedisStore::connect(&config.redis_url(), config.redis_connect_timeout)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to Redis at {} within {:?}",
                config.redis_addr, config.redis_connect_timeout
            )
        })?;

    let state = AppState::new(Arc::new(store));

    let outcome = state
        .quotes
        .seed()
        .await
        .context("Failed to insert quotes in Redis")?;
    tracing::info!("Quote seeding finished: {:?}", outcome);

    let listen_addr = config.listen_socket_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to listen on {}", listen_addr))?;

    tracing::info!("Starting HTTP server on {}", listen_addr);
    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("quote-kv stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
