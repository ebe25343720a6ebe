//! Response normalization
//!
//! Supports: bare payloads, `data`, `resource_response.data`,
//! `resource_data_cache` envelopes, embedded API errors, bookmarks,
//! client context metadata.
//!
//! # Overview
//!
//! Every endpoint of this API family wraps its real payload in one of a
//! small set of envelope shapes, and reports failures inside otherwise
//! successful HTTP responses. [`ApiResponse`] ingests one decoded payload
//! and exposes a uniform query surface over it; the `envelope` submodule
//! holds the ordered shape-matcher tables that locate each derived field.

mod envelope;
mod normalized;
mod types;

pub use envelope::resolve;
pub use normalized::ApiResponse;
pub use types::{ApiError, PaginationPage, ResolvedEnvelope};
