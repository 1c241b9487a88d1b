//! Event creation request and its validation.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::NewEvent;
use crate::error::ApiError;

/// Request body for `POST /api/events`.
///
/// Every field is optional at the decoding stage so that absent fields
/// surface as a validation failure rather than a decoding failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Event title. Required, non-empty.
    #[serde(default)]
    #[schema(example = "Robotics Workshop")]
    pub title: Option<String>,
    /// Description. Required, non-empty.
    #[serde(default)]
    #[schema(example = "Build and program a line follower")]
    pub description: Option<String>,
    /// ISO-8601 date. Required, non-empty; the format is not checked.
    #[serde(default)]
    #[schema(example = "2024-12-01")]
    pub date: Option<String>,
    /// Venue. Required, non-empty.
    #[serde(default)]
    #[schema(example = "Science Block")]
    pub location: Option<String>,
    /// Capacity as a positive integer or a string holding one.
    #[serde(default)]
    #[schema(value_type = Option<u64>, example = 40)]
    pub capacity: Option<CapacityInput>,
}

/// Capacity as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CapacityInput {
    /// JSON number.
    Number(serde_json::Number),
    /// String such as `"25"`.
    Text(String),
}

impl CapacityInput {
    /// Returns the capacity if it is a positive integer.
    #[must_use]
    pub fn to_capacity(&self) -> Option<u64> {
        let value = match self {
            Self::Number(n) => n.as_u64(),
            Self::Text(s) => s.trim().parse::<u64>().ok(),
        };
        value.filter(|c| *c > 0)
    }
}

impl CreateEventRequest {
    /// Checks each required field and produces a [`NewEvent`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingFields`] naming every field that is
    /// absent, empty, or (for `capacity`) not a positive integer.
    pub fn validate(self) -> Result<NewEvent, ApiError> {
        let mut missing = Vec::new();

        let title = required_text(self.title, "title", &mut missing);
        let description = required_text(self.description, "description", &mut missing);
        let date = required_text(self.date, "date", &mut missing);
        let location = required_text(self.location, "location", &mut missing);
        let capacity = self.capacity.as_ref().and_then(CapacityInput::to_capacity);
        if capacity.is_none() {
            missing.push("capacity");
        }

        match (title, description, date, location, capacity) {
            (Some(title), Some(description), Some(date), Some(location), Some(capacity)) => {
                Ok(NewEvent {
                    title,
                    description,
                    date,
                    location,
                    capacity,
                })
            }
            _ => Err(ApiError::MissingFields(missing)),
        }
    }
}

fn required_text(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    let value = value.filter(|v| !v.is_empty());
    if value.is_none() {
        missing.push(field);
    }
    value
}
