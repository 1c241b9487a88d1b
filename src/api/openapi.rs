//! OpenAPI document and its routes.
//!
//! With the `swagger-ui` feature the document is also browsable at
//! `/swagger-ui`. Without it only the raw JSON is served.

use axum::Router;
use utoipa::OpenApi;

use super::handlers::{club, event, system};
use crate::api::dto::CreateEventRequest;
use crate::app_state::AppState;
use crate::domain::{Club, Event};
use crate::error::ErrorResponse;

/// Path of the generated OpenAPI JSON document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of the REST surface.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "campus-events",
        description = "Campus events and clubs served from an in-memory catalog."
    ),
    paths(
        system::health_handler,
        event::list_events,
        event::get_event,
        event::create_event,
        club::list_clubs,
    ),
    components(schemas(
        Event,
        Club,
        CreateEventRequest,
        ErrorResponse,
        system::HealthResponse,
    )),
    tags(
        (name = "System", description = "Service health"),
        (name = "Events", description = "Campus events"),
        (name = "Clubs", description = "Student clubs"),
    )
)]
pub struct ApiDoc;

/// Documentation routes.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    use utoipa_swagger_ui::SwaggerUi;

    Router::new().merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

/// Documentation routes.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(
        OPENAPI_JSON_PATH,
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
