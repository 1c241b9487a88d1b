//! Cross-cutting HTTP layers.
//!
//! Every response passes through the same stack, outermost first:
//! request tracing, CORS, security headers, panic recovery. A panic in
//! any handler becomes the generic 500 envelope instead of tearing down
//! the connection.

use std::any::Any;

use axum::Router;
use axum::http::header::{
    REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_DNS_PREFETCH_CONTROL, X_FRAME_OPTIONS,
};
use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use super::handlers::system::endpoint_not_found;
use crate::app_state::AppState;
use crate::error::ApiError;

/// Installs the 404 fallback and the middleware stack on `router`.
///
/// Must be called after all routes are merged, since layers only wrap
/// routes that already exist. Tracing stays outside CORS: `Cors` needs a
/// `Default` response body, which the trace body does not provide.
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.fallback(endpoint_not_found).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(SetResponseHeaderLayer::if_not_present(
                X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                X_FRAME_OPTIONS,
                HeaderValue::from_static("SAMEORIGIN"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                REFERRER_POLICY,
                HeaderValue::from_static("no-referrer"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                X_DNS_PREFETCH_CONTROL,
                HeaderValue::from_static("off"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("cross-origin-opener-policy"),
                HeaderValue::from_static("same-origin"),
            ))
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

/// Converts a caught panic payload into the 500 envelope.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn string_panic_payload_maps_to_500() {
        let response = panic_response(Box::new("boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn opaque_panic_payload_maps_to_500() {
        let response = panic_response(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
