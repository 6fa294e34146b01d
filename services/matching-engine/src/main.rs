use std::sync::Arc;

use anyhow::Context;
use matching_engine::config::EngineConfig;
use matching_engine::server::{self, AppState};
use matching_engine::{EventPublisher, MatchRegistry, MatchingEngine};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EngineConfig::from_env();
    tracing::info!(?config, "starting matching engine service");

    let publisher = Arc::new(EventPublisher::connect(
        &config.kafka_brokers,
        &config.match_events_topic,
    ));
    let registry = Arc::new(MatchRegistry::new());
    let engine = Arc::new(MatchingEngine::new(registry.clone(), publisher.clone()));
    let state = AppState::new(engine, registry, publisher.clone());

    let orders = TcpListener::bind(config.orders_addr)
        .await
        .context("bind orders listener")?;
    let registration = TcpListener::bind(config.registration_addr)
        .await
        .context("bind registration listener")?;
    tracing::info!(
        orders = %config.orders_addr,
        registration = %config.registration_addr,
        "listening"
    );

    let orders_app = server::orders_router(state.clone());
    let registration_app = server::registration_router(state);

    tokio::select! {
        result = axum::serve(orders, orders_app) => {
            result.context("orders server")?;
        }
        result = axum::serve(registration, registration_app) => {
            result.context("registration server")?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    publisher.shutdown();
    Ok(())
}
