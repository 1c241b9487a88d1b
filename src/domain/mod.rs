//! Domain layer: catalog records and the in-memory catalog store.
//!
//! Events and clubs are plain records. [`CatalogStore`] owns both
//! collections for the lifetime of the process and is the only place
//! where the event list may grow.

pub mod catalog;
pub mod club;
pub mod event;
pub mod seed;

pub use catalog::CatalogStore;
pub use club::Club;
pub use event::{Event, EventId, NewEvent};
