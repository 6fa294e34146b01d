//! Service configuration
//!
//! Defaults match the conventional local deployment; every value can be
//! overridden from the environment.

use std::env;
use std::net::SocketAddr;

use tracing::warn;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Kafka bootstrap servers.
    pub kafka_brokers: String,
    /// Topic for order events.
    pub match_events_topic: String,
    /// Order placement HTTP listener.
    pub orders_addr: SocketAddr,
    /// Match registration listener.
    pub registration_addr: SocketAddr,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kafka_brokers: "localhost:9092".to_string(),
            match_events_topic: "match.events".to_string(),
            orders_addr: ([0, 0, 0, 0], 8081).into(),
            registration_addr: ([0, 0, 0, 0], 50051).into(),
        }
    }
}

impl EngineConfig {
    /// Build from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            kafka_brokers: env_or("KAFKA_BROKERS", defaults.kafka_brokers),
            match_events_topic: env_or("MATCH_EVENTS_TOPIC", defaults.match_events_topic),
            orders_addr: addr_env_or("ORDERS_ADDR", defaults.orders_addr),
            registration_addr: addr_env_or("REGISTRATION_ADDR", defaults.registration_addr),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn addr_env_or(key: &str, default: SocketAddr) -> SocketAddr {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "unparseable listen address; using default");
            default
        }),
        Err(_) => default,
    }
}
