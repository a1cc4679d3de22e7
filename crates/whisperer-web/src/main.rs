//! Data Whisperer web server.
//!
//! Run with: cargo run -p whisperer-web

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use whisperer_common::ServerConfig;
use whisperer_web::router::build_router;
use whisperer_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!(threshold = config.match_threshold, "starting Data Whisperer");

    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
