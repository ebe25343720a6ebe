//! The normalized response model

use super::envelope::{self, is_falsy};
use super::types::{ApiError, PaginationPage, ResolvedEnvelope};
use crate::types::JsonObject;
use serde_json::Value;

/// Normalized view over one decoded API payload.
///
/// Created empty, populated by [`fill`](Self::fill) or
/// [`fill_from_json`](Self::fill_from_json), then queried through uniform
/// accessors regardless of which envelope shape the endpoint used. An
/// instance may be refilled across the successive pages of a pagination
/// loop; every fill swaps in a freshly resolved [`ResolvedEnvelope`], so a
/// reader never observes a mix of old and new fields. One instance belongs
/// to one logical request/response cycle at a time — concurrent queries get
/// an instance each.
#[derive(Debug, Clone, Default)]
pub struct ApiResponse {
    raw: Value,
    resolved: ResolvedEnvelope,
}

impl ApiResponse {
    /// Create an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a decoded payload, replacing every derived field.
    ///
    /// Never fails: fields whose envelope shape is missing or unrecognized
    /// are simply absent afterwards.
    pub fn fill(&mut self, payload: Value) {
        let resolved = envelope::resolve(&payload);
        self.raw = payload;
        self.resolved = resolved;
    }

    /// Ingest a raw body, decoding it as JSON first.
    ///
    /// A body that does not parse — including the empty string — fills the
    /// response as if the payload were absent: transport garbage reads as
    /// "no data", not as a failure.
    pub fn fill_from_json(&mut self, body: &str) {
        let payload = serde_json::from_str(body).unwrap_or(Value::Null);
        self.fill(payload);
    }

    /// The full decoded payload exactly as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The resolved primary data, whichever envelope shape it came from.
    pub fn get_data(&self) -> Option<&Value> {
        self.resolved.data.as_ref()
    }

    /// A single field of the resolved primary data.
    ///
    /// Absent when the data is missing, not key-addressable, or lacks the
    /// key.
    pub fn get_data_field(&self, key: &str) -> Option<&Value> {
        self.resolved.data.as_ref()?.get(key)
    }

    /// Like [`get_data`](Self::get_data), but error state wins: an erroring
    /// response has no response data no matter what its data envelope holds.
    pub fn get_response_data(&self) -> Option<&Value> {
        if self.has_errors() {
            None
        } else {
            self.get_data()
        }
    }

    /// Like [`get_data_field`](Self::get_data_field), gated on error state
    /// the same way.
    pub fn get_response_data_field(&self, key: &str) -> Option<&Value> {
        if self.has_errors() {
            None
        } else {
            self.get_data_field(key)
        }
    }

    /// Whether the payload carried an embedded API error.
    pub fn has_errors(&self) -> bool {
        self.resolved.error.is_some()
    }

    /// The embedded API error, if any.
    pub fn get_last_error(&self) -> Option<&ApiError> {
        self.resolved.error.as_ref()
    }

    /// Whether the response carries no usable data.
    ///
    /// True when the error-gated response data is absent or
    /// empty-equivalent (null, `false`, `0`, `""`, `[]`, `{}`). An erroring
    /// response is therefore always empty; callers tell the two states
    /// apart with [`has_errors`](Self::has_errors).
    pub fn is_empty(&self) -> bool {
        self.get_response_data().map_or(true, is_falsy)
    }

    /// Whether `key` exists at the top level of the *raw* payload,
    /// independent of envelope resolution.
    pub fn has_data(&self, key: &str) -> bool {
        self.raw.get(key).is_some()
    }

    /// Pagination bookmarks, or empty when the payload has none.
    pub fn get_bookmarks(&self) -> &[String] {
        &self.resolved.bookmarks
    }

    /// Client/context metadata, or an empty map when the payload has none.
    pub fn get_client_info(&self) -> &JsonObject {
        &self.resolved.client_context
    }

    /// The pagination view of this response: page data plus bookmarks.
    ///
    /// `None` when the pagination envelope is absent — a normal terminal
    /// state, never an error. The view is all-or-nothing: a payload
    /// carrying only one of the two envelope fields yields `None`.
    pub fn get_pagination_data(&self) -> Option<&PaginationPage> {
        self.resolved.pagination.as_ref()
    }
}
