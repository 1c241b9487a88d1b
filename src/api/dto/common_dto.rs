//! Success envelope shared by every `/api` endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// Uniform success envelope.
///
/// `data`, `count` and `message` are omitted from the JSON when unset.
/// List responses always set `count` to the length of `data`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true` for this type; failures use
    /// [`crate::error::ErrorResponse`].
    pub success: bool,
    /// Response payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of items in `data` for list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Optional human-readable note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wraps a single record.
    #[must_use]
    pub fn item(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
        }
    }

    /// Attaches a message to the envelope.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wraps a collection, setting `count` from its length.
    #[must_use]
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data: Some(data),
            message: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn list_count_matches_length() {
        let envelope = ApiResponse::list(vec!["a", "b", "c"]);
        assert_eq!(envelope.count, Some(3));
        assert_eq!(envelope.data.as_ref().map(Vec::len), Some(3));

        let empty: ApiResponse<Vec<u8>> = ApiResponse::list(Vec::new());
        assert_eq!(empty.count, Some(0));
    }

    #[test]
    fn unset_fields_are_omitted() {
        let Ok(json) = serde_json::to_value(ApiResponse::item(7)) else {
            panic!("serialization failed");
        };
        assert_eq!(json, serde_json::json!({ "success": true, "data": 7 }));
    }

    #[test]
    fn message_is_serialized_when_set() {
        let envelope = ApiResponse::item("x").with_message("done");
        let Ok(json) = serde_json::to_value(envelope) else {
            panic!("serialization failed");
        };
        assert_eq!(json["message"], "done");
        assert!(json.get("count").is_none());
    }
}
