//! # campus-events
//!
//! REST API serving campus events and student clubs from an in-memory
//! catalog.
//!
//! Both collections are seeded at startup and live for the lifetime of
//! the process. Events can be listed, fetched by id and created; clubs
//! are read-only. Every response uses the same JSON envelope.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Middleware (api/middleware): CORS, tracing, headers, panic → 500
//!     ├── REST Handlers (api/handlers)
//!     │
//!     └── CatalogStore (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
