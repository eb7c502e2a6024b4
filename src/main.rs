mod api_doc;
mod config;
mod error;
mod filesystem;
mod handlers;
mod models;
mod routes;
mod state;
mod store;
mod todo;
mod workspace;

use anyhow::Context;
use config::Config;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workspace::Workspace;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG controls verbosity, e.g. RUST_LOG=debug,tower_http=trace
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("todo-fs-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = store::from_config(&config).await?;
    let workspace = Workspace::open(&config.workspace_dir).await?;
    tracing::info!("Workspace root: {}", workspace.root().display());
    let addr = format!("{}:{}", config.service_host, config.service_port);

    let app = routes::router(AppState::new(store, workspace, config));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("todo-fs-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
