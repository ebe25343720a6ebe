//! Response types
//!
//! Defines the records produced by envelope resolution.

use crate::types::{JsonObject, JsonValue};
use serde_json::Value;

/// API-reported error embedded in an otherwise successful response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// Human-readable message reported by the API
    pub message: String,
    /// The error value exactly as returned, for callers that need the
    /// extra fields the API attaches (codes, request ids, ...)
    pub meta: JsonValue,
}

impl ApiError {
    /// Build an error record from the resolved error value.
    ///
    /// The API reports errors either as a bare string or as an object with
    /// a `message` field; anything else keeps its metadata but gets an
    /// empty message.
    pub(crate) fn from_value(value: &Value) -> Self {
        let message = match value {
            Value::String(s) => s.clone(),
            _ => value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        };
        Self {
            message,
            meta: value.clone(),
        }
    }
}

/// One page of a paginated listing: the page's data plus the bookmarks to
/// echo into the next request.
///
/// Constructed only when the payload carries both halves of the pagination
/// envelope; a payload with only one of them has no page view at all.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationPage {
    /// The page's primary data, taken from the listing envelope
    pub data: JsonValue,
    /// Continuation tokens for the next request; empty on the terminal page
    pub bookmarks: Vec<String>,
}

/// Immutable snapshot of every derived field for one payload.
///
/// Rebuilt wholesale by [`super::resolve`] on every fill and swapped in as
/// a unit, so a reused response never exposes a mix of old and new fields.
#[derive(Debug, Clone, Default)]
pub struct ResolvedEnvelope {
    /// Primary data, from whichever data shape matched first
    pub data: Option<JsonValue>,
    /// Embedded API error, if any shape carried one
    pub error: Option<ApiError>,
    /// Pagination bookmarks; empty when the payload has none
    pub bookmarks: Vec<String>,
    /// Client/context metadata; empty when the payload has none
    pub client_context: JsonObject,
    /// Pagination page view; present only when fully resolvable
    pub pagination: Option<PaginationPage>,
}

#[cfg(test)]
mod api_error_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_from_object() {
        let err = ApiError::from_value(&json!({"message": "broken", "code": 13}));
        assert_eq!(err.message, "broken");
        assert_eq!(err.meta["code"], 13);
    }

    #[test]
    fn test_error_from_string() {
        let err = ApiError::from_value(&json!("broken"));
        assert_eq!(err.message, "broken");
        assert_eq!(err.meta, json!("broken"));
    }

    #[test]
    fn test_error_without_message() {
        let err = ApiError::from_value(&json!({"status": "failure"}));
        assert_eq!(err.message, "");
        assert_eq!(err.meta["status"], "failure");
    }
}
