//! REST API layer: route handlers, DTOs, documentation and middleware.
//!
//! Resource endpoints are mounted under `/api`; the health probe lives at
//! the root.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the router with every REST and documentation endpoint, without
/// middleware or fallback.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
        .merge(openapi::routes())
}

/// Builds the complete application: routes, 404 fallback, middleware and
/// state.
pub fn build_app(state: AppState) -> Router {
    middleware::apply(build_router()).with_state(state)
}
