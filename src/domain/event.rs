//! Event records and their identifier.
//!
//! [`EventId`] is a newtype over `u64` so event identifiers cannot be
//! mixed up with capacities, counts, or club ids.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a campus event.
///
/// Allocated by [`super::CatalogStore`] when an event is created and
/// immutable thereafter. Serialized as a bare JSON integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one, or `None` on overflow.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A campus event as stored and served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Store-assigned identifier.
    #[schema(value_type = u64, example = 1)]
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Calendar date as an ISO-8601 string (e.g. `"2024-09-15"`).
    pub date: String,
    /// Venue.
    pub location: String,
    /// Maximum number of registrations.
    pub capacity: u64,
    /// Registrations so far. Not checked against `capacity`.
    pub registered: u32,
}

/// Validated fields for an event that has not been stored yet.
///
/// Produced by request validation; the store turns it into an [`Event`]
/// by assigning an id and zero registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// Event title (non-empty).
    pub title: String,
    /// Description (non-empty).
    pub description: String,
    /// Date string (non-empty).
    pub date: String,
    /// Venue (non-empty).
    pub location: String,
    /// Capacity (positive).
    pub capacity: u64,
}

impl NewEvent {
    /// Materializes the event with the given id and no registrations.
    #[must_use]
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            capacity: self.capacity,
            registered: 0,
        }
    }
}
