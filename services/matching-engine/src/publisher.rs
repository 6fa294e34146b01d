//! Event publisher
//!
//! Serializes orders and appends them to the `match.events` Kafka topic.
//! Delivery is synchronous with acknowledgement from all in-sync
//! replicas, Snappy compression, and up to five transient retries inside
//! the client. At-least-once: on permanent failure the event is logged
//! and lost, the matching result is never rolled back, and downstream
//! consumers must be idempotent.
//!
//! A broker that cannot be configured at startup leaves the publisher
//! inert: `publish` becomes a logged no-op and `connected()` feeds the
//! health endpoint instead of failing the process.

use std::time::Duration;

use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use thiserror::Error;
use tracing::{debug, info, warn};
use types::order::Order;

/// Publisher failures surfaced to the engine.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("failed to encode order: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("broker send failed: {0}")]
    Broker(String),
}

/// Kafka-backed order event publisher.
pub struct EventPublisher {
    producer: Option<FutureProducer>,
    topic: String,
}

impl EventPublisher {
    /// Configure a producer for the given brokers.
    ///
    /// Configuration failure is non-fatal: the returned publisher is
    /// inert and reports `connected() == false` for the health check.
    pub fn connect(brokers: &str, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        let result = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("acks", "all")
            .set("message.send.max.retries", "5")
            .set("compression.codec", "snappy")
            .set("message.timeout.ms", "10000")
            .create::<FutureProducer>();

        match result {
            Ok(producer) => {
                info!(brokers, topic, "event publisher configured");
                Self {
                    producer: Some(producer),
                    topic,
                }
            }
            Err(err) => {
                warn!(brokers, error = %err, "event publisher unavailable; events will be dropped");
                Self {
                    producer: None,
                    topic,
                }
            }
        }
    }

    /// An inert publisher; `publish` is a logged no-op.
    pub fn disabled(topic: impl Into<String>) -> Self {
        Self {
            producer: None,
            topic: topic.into(),
        }
    }

    /// Whether a producer is configured. Health-check signal.
    pub fn connected(&self) -> bool {
        self.producer.is_some()
    }

    /// Publish an order to the event topic and await acknowledgement.
    pub async fn publish(&self, order: &Order) -> Result<(), PublishError> {
        let Some(producer) = &self.producer else {
            warn!(order_id = %order.id, "publisher inert; dropping event");
            return Ok(());
        };

        let payload = serde_json::to_vec(order)?;
        let record = FutureRecord::to(&self.topic)
            .key(order.id.as_str())
            .payload(&payload);

        match producer
            .send(record, Timeout::After(Duration::from_secs(10)))
            .await
        {
            Ok((partition, offset)) => {
                debug!(
                    order_id = %order.id,
                    topic = %self.topic,
                    partition,
                    offset,
                    "event published"
                );
                Ok(())
            }
            Err((err, _)) => Err(PublishError::Broker(err.to_string())),
        }
    }

    /// Drain in-flight sends before terminating.
    pub fn shutdown(&self) {
        if let Some(producer) = &self.producer {
            if let Err(err) = producer.flush(Timeout::After(Duration::from_secs(5))) {
                warn!(error = %err, "publisher flush failed during shutdown");
            } else {
                info!("event publisher drained");
            }
        }
    }
}
