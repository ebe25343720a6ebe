//! Envelope shape resolution
//!
//! Each derived field has an ordered table of shape matchers: pure functions
//! from a raw payload to an optional field location. The first matching
//! shape wins, and shapes are independent per field — a payload may resolve
//! its error and its bookmarks from different envelope families. A field no
//! shape matches resolves to absence, never to an error; envelope shapes the
//! API grows later stay invisible until a matcher is added to its table.

use super::types::{ApiError, PaginationPage, ResolvedEnvelope};
use serde_json::Value;

/// A shape matcher: locates one derived field inside a raw payload.
type Matcher = fn(&Value) -> Option<&Value>;

/// Known locations of the primary data, in priority order.
const DATA_SHAPES: &[Matcher] = &[
    data_field,
    resource_response_data,
    resource_data_cache_data,
    bare_payload,
];

/// Known locations of an embedded error, in priority order.
const ERROR_SHAPES: &[Matcher] = &[error_field, resource_response_error];

/// Known locations of pagination bookmarks.
const BOOKMARK_SHAPES: &[Matcher] = &[resource_options_bookmarks];

/// Known locations of client/context metadata.
const CLIENT_CONTEXT_SHAPES: &[Matcher] = &[client_context_field];

fn data_field(payload: &Value) -> Option<&Value> {
    payload.get("data")
}

fn resource_response_data(payload: &Value) -> Option<&Value> {
    payload.get("resource_response")?.get("data")
}

/// Recommendation/autocomplete endpoints bury their payload in a cache list.
fn resource_data_cache_data(payload: &Value) -> Option<&Value> {
    payload.get("resource_data_cache")?.get(0)?.get("data")
}

/// Endpoints outside the enveloped families return their payload bare.
fn bare_payload(payload: &Value) -> Option<&Value> {
    if payload.is_null() {
        None
    } else {
        Some(payload)
    }
}

fn error_field(payload: &Value) -> Option<&Value> {
    payload.get("error")
}

fn resource_response_error(payload: &Value) -> Option<&Value> {
    payload.get("resource_response")?.get("error")
}

fn resource_options_bookmarks(payload: &Value) -> Option<&Value> {
    payload.get("resource")?.get("options")?.get("bookmarks")
}

fn client_context_field(payload: &Value) -> Option<&Value> {
    payload.get("client_context")
}

/// Try each matcher in table order, returning the first hit.
fn first_match<'a>(shapes: &[Matcher], payload: &'a Value) -> Option<&'a Value> {
    shapes.iter().find_map(|matcher| matcher(payload))
}

/// Resolve one decoded payload into its derived fields.
///
/// Pure and total: any payload resolves, and fields whose shapes are all
/// absent come back absent.
pub fn resolve(payload: &Value) -> ResolvedEnvelope {
    let data = first_match(DATA_SHAPES, payload).cloned();
    // Success responses carry `"error": null`; that is not an error.
    let error = first_match(ERROR_SHAPES, payload)
        .filter(|value| !is_falsy(value))
        .map(ApiError::from_value);
    let bookmarks = first_match(BOOKMARK_SHAPES, payload)
        .map(collect_bookmarks)
        .unwrap_or_default();
    let client_context = first_match(CLIENT_CONTEXT_SHAPES, payload)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    let pagination = resolve_pagination(payload);

    ResolvedEnvelope {
        data,
        error,
        bookmarks,
        client_context,
        pagination,
    }
}

/// The pagination view pairs the listing envelope's data with its bookmarks.
/// Both must resolve; a partial pair means no pagination at all.
fn resolve_pagination(payload: &Value) -> Option<PaginationPage> {
    let data = resource_response_data(payload)?;
    let bookmarks = first_match(BOOKMARK_SHAPES, payload)?;
    Some(PaginationPage {
        data: data.clone(),
        bookmarks: collect_bookmarks(bookmarks),
    })
}

/// Bookmarks are opaque strings; anything else in the list is skipped.
fn collect_bookmarks(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Emptiness for JSON values: null, `false`, zero, the empty string and
/// empty collections all count as empty.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
