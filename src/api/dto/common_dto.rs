//! Shared DTO types used across multiple endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation body returned by delete operations.
///
/// Serialized with a capitalized `Message` key, the wire contract the
/// original service shipped with.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    #[serde(rename = "Message")]
    pub message: String,
}

impl MessageResponse {
    /// Builds the delete confirmation for `entity` (`"customer"`,
    /// `"mechanic"`, `"service ticket"`) with the given id.
    #[must_use]
    pub fn deleted(entity: &str, id: i64) -> Self {
        Self {
            message: format!("Successfully deleted {entity} {id}!"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn message_key_is_capitalized() {
        let body = MessageResponse::deleted("customer", 1);
        let json = serde_json::to_value(&body).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(
            json.pointer("/Message").and_then(|v| v.as_str()),
            Some("Successfully deleted customer 1!")
        );
    }

    #[test]
    fn deleted_message_names_entity_and_id() {
        let body = MessageResponse::deleted("mechanic", 42);
        assert_eq!(body.message, "Successfully deleted mechanic 42!");
    }
}
