//! Facility booking HTTP server.
//!
//! Loads the facility registry, builds the router and serves it.
//!
//! # Environment Variables
//!
//! - `FACILITY_CONFIG`: configuration directory (default: ./config/default)
//! - `HOST`: server host (default: 0.0.0.0)
//! - `PORT`: server port (default: 8080)
//! - `RUST_LOG`: log level (default: info)

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use facility_booking::api::{AppState, create_router};
use facility_booking::config::ConfigLoader;
use facility_booking::registry::BookingCoordinator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config_dir = env::var("FACILITY_CONFIG").unwrap_or_else(|_| "./config/default".to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading facility configuration from {}", config_dir))?;
    let coordinator = BookingCoordinator::from_config(&config)?;
    info!(
        facilities = ?coordinator.store().names(),
        currency = %coordinator.currency(),
        "Facility registry ready"
    );

    let app = create_router(AppState::new(coordinator));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", host, port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
