use std::sync::Arc;

use crate::engine::MatchingEngine;
use crate::publisher::EventPublisher;
use crate::registry::MatchRegistry;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchingEngine>,
    pub registry: Arc<MatchRegistry>,
    pub publisher: Arc<EventPublisher>,
}

impl AppState {
    pub fn new(
        engine: Arc<MatchingEngine>,
        registry: Arc<MatchRegistry>,
        publisher: Arc<EventPublisher>,
    ) -> Self {
        Self {
            engine,
            registry,
            publisher,
        }
    }
}
