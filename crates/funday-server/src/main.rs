use std::sync::Arc;

use anyhow::{Context, Result};
use funday_core::Config;
use funday_server::{app, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    funday_core::init()?;

    let config = Config::from_env();
    let state = Arc::new(AppState::from_config(&config)?);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
