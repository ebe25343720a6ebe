//! Keyword recommendations

use super::SEARCH_RESOURCE;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::query;
use crate::response::ApiResponse;
use crate::types::JsonObject;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Keyword-recommendation lookups
#[derive(Debug, Clone)]
pub struct Keywords {
    http: Arc<HttpClient>,
}

impl Keywords {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Keywords the platform recommends alongside `query`.
    ///
    /// The recommendation endpoint answers with the `resource_data_cache`
    /// envelope carrying a `guides` list; each guide's `term` is a
    /// recommended keyword. A response without that envelope yields an
    /// empty list, not an error.
    pub async fn recommended_for(&self, query: &str) -> Result<Vec<String>> {
        let mut options = JsonObject::new();
        options.insert("scope".to_string(), json!("pins"));
        options.insert("query".to_string(), json!(query));
        let source_url = format!("/search/pins/?q={query}");
        let data = query::data_param(options, &[])?;

        let payload = self
            .http
            .get_value(
                SEARCH_RESOURCE,
                RequestConfig::new()
                    .query("source_url", source_url)
                    .query("data", data),
            )
            .await?;

        let mut response = ApiResponse::new();
        response.fill(payload);

        let terms = parse_guides(&response);
        debug!("{} recommended keywords for {query:?}", terms.len());
        Ok(terms)
    }
}

/// Pull the `term` strings out of the recommendation guides, if present.
fn parse_guides(response: &ApiResponse) -> Vec<String> {
    response
        .get_data_field("guides")
        .and_then(Value::as_array)
        .map(|guides| {
            guides
                .iter()
                .filter_map(|guide| guide.get("term"))
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
