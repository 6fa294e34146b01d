//! Landing service
//!
//! Public welcome routes, separate from the matching surfaces.

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

fn create_router() -> Router {
    Router::new()
        .route("/", get(|| async { "Welcome to the Sports Betting App!" }))
        .route("/about", get(|| async { "About the Sports Betting App" }))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let addr: SocketAddr = env::var("LANDING_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()
        .context("parse LANDING_ADDR")?;

    let listener = TcpListener::bind(addr).await.context("bind landing listener")?;
    tracing::info!(%addr, "landing service listening");

    axum::serve(listener, create_router()).await?;
    Ok(())
}
