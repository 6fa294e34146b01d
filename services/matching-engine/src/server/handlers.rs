use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};
use types::order::Order;

use super::error::AppError;
use super::models::{HealthResponse, RegisterMatchRequest, RegisterMatchResponse};
use super::state::AppState;

/// `POST /place-order`
///
/// Decode and validate synchronously, then hand the order to a detached
/// matching task. Accepted orders report `202` before matching runs;
/// later failures are observable only on the event stream.
pub async fn place_order(
    State(state): State<AppState>,
    payload: Result<Json<Order>, JsonRejection>,
) -> Response {
    let Json(order) = match payload {
        Ok(json) => json,
        Err(_) => return (StatusCode::BAD_REQUEST, "invalid input").into_response(),
    };

    if let Err(err) = state.registry.validate_order(&order) {
        return AppError::from(err).into_response();
    }

    info!(order_id = %order.id, match_id = %order.match_id, side = %order.side, "order accepted");
    let engine = state.engine.clone();
    tokio::spawn(async move {
        if let Err(err) = engine.place_order(order).await {
            error!(error = %err, "order placement failed after acceptance");
        }
    });

    StatusCode::ACCEPTED.into_response()
}

/// `POST /register-match` on the order surface.
pub async fn register_match(
    State(state): State<AppState>,
    payload: Result<Json<RegisterMatchRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(_) => return (StatusCode::BAD_REQUEST, "invalid input").into_response(),
    };

    match state
        .registry
        .register_match(request.match_id, request.team_a, request.team_b)
    {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

/// `POST /register-match` on the registration surface.
///
/// Same semantics as the order-surface route, but replies with the
/// status body the match scheduler expects.
pub async fn register_match_rpc(
    State(state): State<AppState>,
    payload: Result<Json<RegisterMatchRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(_) => return (StatusCode::BAD_REQUEST, "invalid input").into_response(),
    };

    match state
        .registry
        .register_match(request.match_id, request.team_a, request.team_b)
    {
        Ok(()) => Json(RegisterMatchResponse {
            status: "Match registered successfully".to_string(),
        })
        .into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

/// `GET /health`
///
/// Reports whether the event publisher is live; an inert publisher means
/// matching still works but events are being dropped.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let publisher = if state.publisher.connected() {
        "connected"
    } else {
        "inert"
    };
    Json(HealthResponse {
        status: "ok".to_string(),
        publisher: publisher.to_string(),
    })
}
