//! Club handlers.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use super::system::endpoint_not_found;
use crate::api::dto::ApiResponse;
use crate::app_state::AppState;
use crate::domain::Club;

/// `GET /api/clubs` — List all clubs.
#[utoipa::path(
    get,
    path = "/api/clubs",
    tag = "Clubs",
    summary = "List clubs",
    description = "Returns every club together with the total count.",
    responses(
        (status = 200, description = "All clubs", body = ApiResponse<Vec<Club>>),
    )
)]
pub async fn list_clubs(State(state): State<AppState>) -> Json<ApiResponse<Vec<Club>>> {
    Json(ApiResponse::list(state.catalog.list_clubs()))
}

/// Club routes, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/clubs", get(list_clubs).fallback(endpoint_not_found))
}
