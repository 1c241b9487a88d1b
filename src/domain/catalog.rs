//! In-memory catalog of events and clubs.
//!
//! [`CatalogStore`] owns both collections. Events sit behind a
//! [`tokio::sync::RwLock`] so concurrent requests can read while a
//! create appends and allocates the next id under a single write guard.
//! Clubs are immutable after construction and need no lock.

use tokio::sync::RwLock;

use super::seed::{seed_clubs, seed_events};
use super::{Club, Event, EventId, NewEvent};
use crate::error::ApiError;

/// Event list plus the id that the next create will receive.
///
/// `next_id` is `None` once the id space is exhausted.
#[derive(Debug)]
struct EventLog {
    events: Vec<Event>,
    next_id: Option<EventId>,
}

/// Central store for all catalog records.
///
/// # Id allocation
///
/// Event ids come from a monotonic counter seeded with
/// `max(initial ids) + 1`, or `1` when there are no initial events.
/// Ids are never reused because events are never removed.
#[derive(Debug)]
pub struct CatalogStore {
    events: RwLock<EventLog>,
    clubs: Vec<Club>,
}

impl CatalogStore {
    /// Creates a store holding the given records in the given order.
    #[must_use]
    pub fn new(events: Vec<Event>, clubs: Vec<Club>) -> Self {
        let next_id = match events.iter().map(|e| e.id).max() {
            Some(max) => max.next(),
            None => Some(EventId::new(1)),
        };
        Self {
            events: RwLock::new(EventLog { events, next_id }),
            clubs,
        }
    }

    /// Creates a store populated with the startup seed records.
    #[must_use]
    pub fn with_seed_data() -> Self {
        Self::new(seed_events(), seed_clubs())
    }

    /// Returns every event in insertion order.
    pub async fn list_events(&self) -> Vec<Event> {
        self.events.read().await.events.clone()
    }

    /// Returns the event with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EventNotFound`] if no event has that id.
    pub async fn get_event(&self, id: EventId) -> Result<Event, ApiError> {
        let log = self.events.read().await;
        log.events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ApiError::EventNotFound(id.to_string()))
    }

    /// Stores a new event and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] if the id space is exhausted.
    pub async fn create_event(&self, new_event: NewEvent) -> Result<Event, ApiError> {
        let mut log = self.events.write().await;
        let id = log
            .next_id
            .ok_or_else(|| ApiError::Internal("event id space exhausted".to_string()))?;

        let event = new_event.into_event(id);
        log.events.push(event.clone());
        log.next_id = id.next();
        Ok(event)
    }

    /// Returns every club in insertion order.
    #[must_use]
    pub fn list_clubs(&self) -> Vec<Club> {
        self.clubs.clone()
    }

    /// Returns the number of stored events.
    pub async fn event_count(&self) -> usize {
        self.events.read().await.events.len()
    }

    /// Returns the number of clubs.
    #[must_use]
    pub fn club_count(&self) -> usize {
        self.clubs.len()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::with_seed_data()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn new_event(title: &str) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            description: "D".to_string(),
            date: "2024-12-01".to_string(),
            location: "L".to_string(),
            capacity: 10,
        }
    }

    #[tokio::test]
    async fn seeded_store_lists_in_order() {
        let store = CatalogStore::with_seed_data();
        let events = store.list_events().await;
        let ids: Vec<u64> = events.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.club_count(), 2);
    }

    #[tokio::test]
    async fn get_existing_and_missing() {
        let store = CatalogStore::with_seed_data();

        let Ok(event) = store.get_event(EventId::new(2)).await else {
            panic!("event 2 should exist");
        };
        assert_eq!(event.title, "Career Fair");

        let missing = store.get_event(EventId::new(999)).await;
        assert!(matches!(missing, Err(ApiError::EventNotFound(ref id)) if id == "999"));
    }

    #[tokio::test]
    async fn create_assigns_max_plus_one() {
        let store = CatalogStore::with_seed_data();
        let Ok(event) = store.create_event(new_event("T")).await else {
            panic!("create failed");
        };
        assert_eq!(event.id, EventId::new(3));
        assert_eq!(event.registered, 0);
        assert_eq!(store.event_count().await, 3);

        let listed = store.list_events().await;
        assert_eq!(listed.last(), Some(&event));
        assert_eq!(listed.iter().filter(|e| e.id == event.id).count(), 1);
    }

    #[tokio::test]
    async fn create_follows_highest_seed_id_not_length() {
        let mut events = seed_events();
        for event in &mut events {
            event.id = EventId::new(event.id.get() * 10);
        }
        let store = CatalogStore::new(events, Vec::new());

        let Ok(event) = store.create_event(new_event("T")).await else {
            panic!("create failed");
        };
        assert_eq!(event.id, EventId::new(21));
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let store = CatalogStore::new(Vec::new(), Vec::new());
        let Ok(first) = store.create_event(new_event("first")).await else {
            panic!("create failed");
        };
        let Ok(second) = store.create_event(new_event("second")).await else {
            panic!("create failed");
        };
        assert_eq!(first.id, EventId::new(1));
        assert_eq!(second.id, EventId::new(2));
    }

    #[tokio::test]
    async fn last_id_before_overflow_is_issued_once() {
        let mut events = seed_events();
        if let Some(last) = events.last_mut() {
            last.id = EventId::new(u64::MAX - 1);
        }
        let store = CatalogStore::new(events, Vec::new());

        let Ok(event) = store.create_event(new_event("last")).await else {
            panic!("create failed");
        };
        assert_eq!(event.id, EventId::new(u64::MAX));

        let result = store.create_event(new_event("overflow")).await;
        assert!(matches!(result, Err(ApiError::Internal(_))));

        let ids: HashSet<u64> = store.list_events().await.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn exhausted_id_space_is_internal_error() {
        let mut events = seed_events();
        if let Some(last) = events.last_mut() {
            last.id = EventId::new(u64::MAX);
        }
        let store = CatalogStore::new(events, Vec::new());

        let result = store.create_event(new_event("T")).await;
        assert!(matches!(result, Err(ApiError::Internal(_))));
        assert_eq!(store.event_count().await, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(CatalogStore::with_seed_data());

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create_event(new_event(&format!("event {i}"))).await
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            let Ok(Ok(event)) = handle.await else {
                panic!("create task failed");
            };
            ids.insert(event.id.get());
        }

        let expected: HashSet<u64> = (3..35).collect();
        assert_eq!(ids, expected);
        assert_eq!(store.event_count().await, 34);
    }

    #[test]
    fn clubs_are_returned_in_seed_order() {
        let store = CatalogStore::default();
        let names: Vec<String> = store.list_clubs().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Computer Science Club", "Business Club"]);
    }
}
