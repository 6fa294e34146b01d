use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use types::errors::RegistryError;

/// Ingress error type for the matching-engine HTTP surfaces.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::MatchAlreadyRegistered { .. } => AppError::Conflict(err.to_string()),
            RegistryError::UnknownMatch { .. }
            | RegistryError::UnknownTeam { .. }
            | RegistryError::IdenticalTeams { .. } => AppError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg, "CONFLICT"),
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
