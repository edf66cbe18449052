use anyhow::{Context, Result};
use backend::{api, config::Config, shutdown};
use chess_brain::{LearningAgent, SnapshotStore};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Load the brain before accepting requests
    let agent = LearningAgent::load(SnapshotStore::new(&config.brain_path));
    let state = api::AppState::new(agent);
    let app = api::router(state.clone());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("[API] Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::ctrl_c())
        .await
        .context("server error")?;

    info!("[API] Shutting down, flushing brain to {:?}", config.brain_path);
    if let Err(e) = state.flush() {
        error!("[API] Final save failed: {}", e);
    }

    Ok(())
}
