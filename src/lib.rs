//! # pinbot
//!
//! A Rust client for the unofficial Pinterest web API.
//!
//! The platform's private endpoints answer with a handful of inconsistent
//! JSON envelopes, report failures inside otherwise successful HTTP
//! responses, and paginate listings with opaque "bookmark" tokens. This
//! crate normalizes those envelopes into one queryable result
//! ([`ApiResponse`]) and drives bookmark pagination ([`BookmarkCursor`]) so
//! endpoint methods stay thin, stateless mappings.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pinbot::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> pinbot::Result<()> {
//!     let client = ApiClient::new();
//!
//!     // Keyword recommendations alongside a query
//!     let keywords = client.keywords().recommended_for("rustic kitchen").await?;
//!
//!     // Walk up to three pages of pin search results
//!     let pins = client.search().pins("rustic kitchen", 3).await?;
//!     println!("{} keywords, {} pins", keywords.len(), pins.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        ApiClient                        │
//! │     keywords() → Keywords        search() → Search      │
//! └────────────────────────────┬────────────────────────────┘
//!                              │
//! ┌────────────┬───────────────┴────────────┬───────────────┐
//! │    http    │          response          │  pagination   │
//! ├────────────┼────────────────────────────┼───────────────┤
//! │ retry      │ envelope matcher tables    │ bookmark      │
//! │ backoff    │ embedded-error surfacing   │ cursor        │
//! │ rate cap   │ client context             │ page views    │
//! │ session    │ pagination views           │               │
//! └────────────┴────────────────────────────┴───────────────┘
//! ```
//!
//! The `response` and `pagination` modules are pure and synchronous; all
//! I/O, retries and throttling live in `http`.

#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Bookmark pagination protocol
pub mod pagination;

/// Endpoint providers (thin glue over the core)
pub mod providers;

/// Request construction for the platform's wire form
pub mod query;

/// Response normalization core
pub mod response;

/// Session/CSRF token bookkeeping
pub mod session;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use http::{HttpClient, HttpClientConfig, RequestConfig};
pub use pagination::{BookmarkCursor, CursorPhase, NextPage};
pub use providers::{ApiClient, Keywords, Search, SearchScope};
pub use response::{ApiError, ApiResponse, PaginationPage};
pub use session::Session;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
