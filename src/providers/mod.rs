//! Endpoint providers
//!
//! Each provider is a thin, stateless mapping: domain call → request
//! construction → normalized response → domain-shaped value. Envelope
//! handling lives in `response`, the page loop in `pagination`; nothing
//! here inspects raw payload shapes.

mod keywords;
mod search;

pub use keywords::Keywords;
pub use search::{Search, SearchScope};

use crate::http::{HttpClient, HttpClientConfig};
use std::sync::Arc;

/// Search resource every scope queries through
pub(crate) const SEARCH_RESOURCE: &str = "/resource/BaseSearchResource/get/";

/// Facade owning the shared transport and handing out provider handles.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
}

impl ApiClient {
    /// Create a client with default configuration.
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom transport configuration.
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self {
            http: Arc::new(HttpClient::with_config(config)),
        }
    }

    /// The shared transport.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Keyword-recommendation lookups.
    pub fn keywords(&self) -> Keywords {
        Keywords::new(Arc::clone(&self.http))
    }

    /// Search listings.
    pub fn search(&self) -> Search {
        Search::new(Arc::clone(&self.http))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
