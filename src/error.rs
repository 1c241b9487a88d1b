//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to an HTTP status code and to the fixed, client-facing message
//! carried in the failure envelope. Internal details stay in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Failure envelope returned by every endpoint.
///
/// ```json
/// { "success": false, "message": "Event not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable reason.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant             | Status | Message                   |
/// |---------------------|--------|---------------------------|
/// | `MissingFields`     | 400    | Missing required fields   |
/// | `InvalidBody`       | 400    | Invalid request body      |
/// | `EventNotFound`     | 404    | Event not found           |
/// | `EndpointNotFound`  | 404    | Endpoint not found        |
/// | `Internal`          | 500    | Internal server error     |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more required create-event fields were absent or invalid.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The request body could not be decoded.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// No event matches the requested id (raw path segment).
    #[error("event not found: {0}")]
    EventNotFound(String),

    /// No route matches the request path and method.
    #[error("endpoint not found: {method} {path}")]
    EndpointNotFound {
        /// Request method.
        method: String,
        /// Request path.
        path: String,
    },

    /// Any fault inside the service.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::EventNotFound(_) | Self::EndpointNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message exposed to clients.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "Missing required fields",
            Self::InvalidBody(_) => "Invalid request body",
            Self::EventNotFound(_) => "Event not found",
            Self::EndpointNotFound { .. } => "Endpoint not found",
            Self::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = ErrorResponse {
            success: false,
            message: self.public_message().to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("failed to read body");
        };
        let Ok(json) = serde_json::from_slice(&bytes) else {
            panic!("body is not JSON");
        };
        json
    }

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ApiError::MissingFields(vec!["title"]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::EventNotFound("999".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::EndpointNotFound {
                method: "GET".to_string(),
                path: "/nope".to_string(),
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_keeps_details_for_logs() {
        let err = ApiError::MissingFields(vec!["title", "capacity"]);
        assert_eq!(err.to_string(), "missing required fields: title, capacity");
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let response = ApiError::Internal("lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Internal server error");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn not_found_envelope() {
        let response = ApiError::EventNotFound("999".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "Event not found" })
        );
    }
}
