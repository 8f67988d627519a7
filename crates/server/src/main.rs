use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use server::{api::seed_demo_movies, build_router, config::load_settings, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    let state = AppState::default();
    if settings.seed_demo {
        seed_demo_movies(&state.api).await;
        info!(count = state.api.store.len().await, "seeded demo movies");
    }
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "movie server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
