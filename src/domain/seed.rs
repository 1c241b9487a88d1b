//! Fixed records loaded into the catalog at startup.

use super::{Club, Event, EventId};

/// Returns the events present when the process starts.
#[must_use]
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: EventId::new(1),
            title: "USIU Tech Conference 2024".to_string(),
            description: "Annual technology conference".to_string(),
            date: "2024-09-15".to_string(),
            location: "USIU Auditorium".to_string(),
            capacity: 500,
            registered: 245,
        },
        Event {
            id: EventId::new(2),
            title: "Career Fair".to_string(),
            description: "Meet potential employers".to_string(),
            date: "2024-10-01".to_string(),
            location: "USIU Main Hall".to_string(),
            capacity: 300,
            registered: 178,
        },
    ]
}

/// Returns the clubs served for the lifetime of the process.
#[must_use]
pub fn seed_clubs() -> Vec<Club> {
    vec![
        Club {
            id: 1,
            name: "Computer Science Club".to_string(),
            description: "For CS enthusiasts".to_string(),
            members: 120,
            president: "John Doe".to_string(),
        },
        Club {
            id: 2,
            name: "Business Club".to_string(),
            description: "Business networking and learning".to_string(),
            members: 85,
            president: "Jane Smith".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_event_ids_are_unique() {
        let events = seed_events();
        let ids: HashSet<_> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn seed_club_ids_are_unique() {
        let clubs = seed_clubs();
        let ids: HashSet<_> = clubs.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), clubs.len());
    }

    #[test]
    fn first_seed_event_is_tech_conference() {
        let events = seed_events();
        let first = events.first();
        assert_eq!(
            first.map(|e| e.title.as_str()),
            Some("USIU Tech Conference 2024")
        );
        assert_eq!(first.map(|e| e.registered), Some(245));
    }
}
