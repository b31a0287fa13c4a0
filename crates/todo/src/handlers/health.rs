//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (reads from the store)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{handlers::JsonResponse, state::AppState};

#[derive(Debug, Serialize)]
pub struct ReadinessStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Runs a read against the store; 200 when it answers, 503 otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.todo_repo.list_todos().await {
        Ok(_) => JsonResponse::ok(ReadinessStatus {
            healthy: true,
            error: None,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            JsonResponse::with_status(
                StatusCode::SERVICE_UNAVAILABLE,
                ReadinessStatus {
                    healthy: false,
                    error: Some(e.to_string()),
                },
            )
            .into_response()
        }
    }
}
