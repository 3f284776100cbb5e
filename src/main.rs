//! iRaiser RSS bridge
//!
//! Polls the iRaiser fundraising counter on a fixed interval and serves the
//! latest 2025 totals as a single-item RSS feed.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::{routing::get, Json, Router};
use clap::Parser;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod counter;
mod error;
mod feed;
mod handlers;
mod state;

#[cfg(test)]
mod integration_tests;

use config::Config;
use counter::CounterClient;
use state::AppState;

#[derive(Parser)]
#[command(name = "iraiser-rss")]
#[command(about = "RSS feed for the iRaiser fundraising counter")]
#[command(version)]
struct Cli {
    /// IP address to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    listen: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 9191)]
    port: u16,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rss", get(handlers::get_rss))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,iraiser_rss=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let state = AppState::new(config);

    // Refresh immediately, then every REFRESH_INTERVAL after completion.
    let client = CounterClient::new(state.config.counter_url.clone());
    tokio::spawn(counter::run(client, state.clone()));

    let addr = SocketAddr::from((cli.listen, cli.port));
    let display_host = if cli.listen.is_unspecified() {
        "localhost".to_string()
    } else {
        cli.listen.to_string()
    };

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!(
        "iRaiser RSS feed available on http://{}:{}/rss",
        display_host,
        cli.port
    );

    axum::serve(listener, app(state)).await.expect("Server error");
}
