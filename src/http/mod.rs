//! HTTP transport
//!
//! Supports: retry with backoff, politeness rate limiting, session token
//! echo, form-encoded requests.
//!
//! # Overview
//!
//! The transport fetches raw bodies and decodes them to generic JSON; it
//! never interprets envelopes — that belongs to the `response` core. It
//! owns everything blocking: timeouts, retries, rate limiting, cancellation.

mod client;
mod rate_limit;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, DEFAULT_BASE_URL,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
