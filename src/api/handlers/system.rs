//! System endpoints: health check and the unmatched-route fallback.

use axum::extract::{OriginalUri, State};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Current time, ISO-8601 UTC with millisecond precision.
    pub timestamp: String,
    /// Seconds since the service started.
    pub uptime: f64,
    /// Service version.
    pub version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, current timestamp, uptime and version.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: state.started_at.elapsed().as_secs_f64(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Fallback for any path or method without a handler.
///
/// Uses the original URI so routes nested under `/api` log their full path.
pub async fn endpoint_not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::EndpointNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// System routes mounted at the root level (not under `/api`).
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler).fallback(endpoint_not_found))
}
