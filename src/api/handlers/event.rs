//! Event handlers: list, get, create.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use super::system::endpoint_not_found;
use crate::api::dto::{ApiResponse, CreateEventRequest};
use crate::app_state::AppState;
use crate::domain::{Event, EventId};
use crate::error::{ApiError, ErrorResponse};

/// `GET /api/events` — List all events.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    summary = "List events",
    description = "Returns every event in creation order together with the total count.",
    responses(
        (status = 200, description = "All events", body = ApiResponse<Vec<Event>>),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Json<ApiResponse<Vec<Event>>> {
    Json(ApiResponse::list(state.catalog.list_events().await))
}

/// `GET /api/events/{id}` — Get a single event.
///
/// Ids that are not integers are reported the same way as unknown ids.
///
/// # Errors
///
/// Returns [`ApiError::EventNotFound`] if no event matches.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "Events",
    summary = "Get event",
    description = "Returns the event with the given id.",
    params(
        ("id" = u64, Path, description = "Event id"),
    ),
    responses(
        (status = 200, description = "Event found", body = ApiResponse<Event>),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let id: EventId = raw_id
        .parse()
        .map_err(|_| ApiError::EventNotFound(raw_id.clone()))?;
    let event = state.catalog.get_event(id).await?;
    Ok(Json(ApiResponse::item(event)))
}

/// `POST /api/events` — Create an event.
///
/// A request without a JSON content type, or with an empty body, is
/// treated as `{}`.
///
/// # Errors
///
/// Returns [`ApiError::MissingFields`] when a required field is absent
/// or invalid, and [`ApiError::InvalidBody`] when the JSON is malformed.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "Events",
    summary = "Create event",
    description = "Creates an event with zero registrations and a store-assigned id.",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = ApiResponse<Event>),
        (status = 400, description = "Missing required fields or invalid body", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req = decode_create_request(&headers, &body)?;

    let new_event = req.validate()?;
    let event = state.catalog.create_event(new_event).await?;
    tracing::info!(event_id = %event.id, title = %event.title, "event created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::item(event).with_message("Event created successfully")),
    ))
}

fn decode_create_request(headers: &HeaderMap, body: &[u8]) -> Result<CreateEventRequest, ApiError> {
    if !has_json_content_type(headers) || body.trim_ascii().is_empty() {
        return Ok(CreateEventRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// `application/json` or any `+json` subtype, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Event routes, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            get(list_events)
                .post(create_event)
                .fallback(endpoint_not_found),
        )
        .route("/events/{id}", get(get_event).fallback(endpoint_not_found))
}
