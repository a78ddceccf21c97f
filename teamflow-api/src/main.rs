//! # TeamFlow API Server
//!
//! This is the main API server for TeamFlow, a small team and task
//! management backend:
//! - Authentication (JWT access + refresh tokens)
//! - User directory (admin only)
//! - Projects with informational member lists
//! - Tasks with a linear status workflow (todo → in-progress → done)
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p teamflow-api
//! ```

use teamflow_api::{app, config::Config};
use teamflow_shared::db::{
    handle::PoolHandle,
    migrations::run_migrations,
    pool::{close_pool, DatabaseConfig},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Process-wide pool handle: the first caller connects, everyone reuses
static DB: PoolHandle = PoolHandle::new();

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teamflow_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "TeamFlow API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    };

    let pool = DB.get_or_connect(&db_config).await?;
    run_migrations(&pool).await?;

    let state = app::AppState::new(pool.clone(), config.clone());
    let router = app::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
