//! HTTP surfaces of the matching-engine service
//!
//! Two listeners: order placement (plus registration and health) on the
//! public port, and the registration endpoint the match scheduler calls
//! on its own port.

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn orders_router(state: AppState) -> Router {
    Router::new()
        .route("/place-order", post(handlers::place_order))
        .route("/register-match", post(handlers::register_match))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn registration_router(state: AppState) -> Router {
    Router::new()
        .route("/register-match", post(handlers::register_match_rpc))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchingEngine;
    use crate::publisher::EventPublisher;
    use crate::registry::MatchRegistry;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;
    use types::ids::{MatchId, TeamId};

    fn test_state() -> AppState {
        let registry = Arc::new(MatchRegistry::new());
        registry
            .register_match(MatchId::new("m1"), TeamId::new("CSK"), TeamId::new("MI"))
            .unwrap();
        let publisher = Arc::new(EventPublisher::disabled("match.events"));
        let engine = Arc::new(MatchingEngine::new(registry.clone(), publisher.clone()));
        AppState::new(engine, registry, publisher)
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_place_order_accepted() {
        let app = orders_router(test_state());
        let body = r#"{
            "id": "o1",
            "match_id": "m1",
            "team_id": "CSK",
            "user_id": "u1",
            "side": "bid",
            "price": 0.6,
            "quantity": 10
        }"#;
        let response = app.oneshot(json_post("/place-order", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_place_order_malformed_body() {
        let app = orders_router(test_state());
        let response = app
            .oneshot(json_post("/place-order", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], b"invalid input");
    }

    #[tokio::test]
    async fn test_place_order_non_positive_quantity_rejected() {
        let app = orders_router(test_state());
        let body = r#"{
            "id": "o1",
            "match_id": "m1",
            "team_id": "CSK",
            "user_id": "u1",
            "side": "bid",
            "price": 0.6,
            "quantity": 0
        }"#;
        let response = app.oneshot(json_post("/place-order", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_place_order_unknown_team_rejected() {
        let app = orders_router(test_state());
        let body = r#"{
            "id": "o1",
            "match_id": "m1",
            "team_id": "RCB",
            "user_id": "u1",
            "side": "bid",
            "price": 0.6,
            "quantity": 10
        }"#;
        let response = app.oneshot(json_post("/place-order", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_match_accepted() {
        let app = orders_router(test_state());
        let body = r#"{"match_id": "m2", "team_a": "RCB", "team_b": "KKR"}"#;
        let response = app
            .oneshot(json_post("/register-match", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_register_match_conflict() {
        let app = orders_router(test_state());
        let body = r#"{"match_id": "m1", "team_a": "RCB", "team_b": "KKR"}"#;
        let response = app
            .oneshot(json_post("/register-match", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_registration_surface_status_body() {
        let app = registration_router(test_state());
        let body = r#"{"match_id": "m3", "team_a": "CSK", "team_b": "MI"}"#;
        let response = app
            .oneshot(json_post("/register-match", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["status"], "Match registered successfully");
    }

    #[tokio::test]
    async fn test_health_reports_inert_publisher() {
        let app = orders_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["publisher"], "inert");
    }
}
