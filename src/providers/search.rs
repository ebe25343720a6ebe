//! Search listings
//!
//! Exercises the bookmark pagination protocol end to end: request a page,
//! normalize it, yield its results, and echo the bookmarks back until the
//! listing is exhausted or the caller's page limit is reached.

use super::SEARCH_RESOURCE;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{BookmarkCursor, NextPage};
use crate::query;
use crate::response::ApiResponse;
use crate::types::JsonObject;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Scope of a search listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Pin results
    Pins,
    /// Board results
    Boards,
    /// User results
    Pinners,
}

impl SearchScope {
    /// Value the API expects in `options.scope`
    pub fn as_str(self) -> &'static str {
        match self {
            SearchScope::Pins => "pins",
            SearchScope::Boards => "boards",
            SearchScope::Pinners => "people",
        }
    }

    /// Path segment of the web page this scope's search lives on
    fn path_segment(self) -> &'static str {
        match self {
            SearchScope::Pins => "pins",
            SearchScope::Boards => "boards",
            SearchScope::Pinners => "people",
        }
    }
}

/// Search listings over pins, boards and people
#[derive(Debug, Clone)]
pub struct Search {
    http: Arc<HttpClient>,
}

impl Search {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Search pins, walking up to `page_limit` pages (0 = no limit).
    pub async fn pins(&self, query: &str, page_limit: usize) -> Result<Vec<Value>> {
        self.execute(SearchScope::Pins, query, page_limit).await
    }

    /// Search boards, walking up to `page_limit` pages (0 = no limit).
    pub async fn boards(&self, query: &str, page_limit: usize) -> Result<Vec<Value>> {
        self.execute(SearchScope::Boards, query, page_limit).await
    }

    /// Search people, walking up to `page_limit` pages (0 = no limit).
    pub async fn pinners(&self, query: &str, page_limit: usize) -> Result<Vec<Value>> {
        self.execute(SearchScope::Pinners, query, page_limit).await
    }

    /// Walk a search listing and collect its results.
    ///
    /// Transport failures surface as errors. An error the API embeds in a
    /// page stops the walk and returns what was collected so far — deciding
    /// whether to resume is the caller's policy, not the loop's.
    pub async fn execute(
        &self,
        scope: SearchScope,
        query: &str,
        page_limit: usize,
    ) -> Result<Vec<Value>> {
        let source_url = format!("/search/{}/?q={query}", scope.path_segment());
        let mut cursor = BookmarkCursor::new();
        let mut response = ApiResponse::new();
        let mut items = Vec::new();

        loop {
            let NextPage::Continue { bookmarks } = cursor.next_page() else {
                break;
            };

            let mut options = JsonObject::new();
            options.insert("scope".to_string(), json!(scope.as_str()));
            options.insert("query".to_string(), json!(query));
            let data = query::data_param(options, &bookmarks)?;

            let body = self
                .http
                .get_text(
                    SEARCH_RESOURCE,
                    RequestConfig::new()
                        .query("source_url", source_url.as_str())
                        .query("data", data),
                )
                .await?;
            response.fill_from_json(&body);

            if response.has_errors() {
                let message = response
                    .get_last_error()
                    .map(|e| e.message.clone())
                    .unwrap_or_default();
                warn!("search {query:?} rejected after {} pages: {message}", cursor.pages_seen());
                break;
            }

            if let Some(page) = cursor.observe(&response) {
                collect_results(&mut items, page.data);
            }

            if page_limit != 0 && cursor.pages_seen() >= page_limit as u64 {
                break;
            }
        }

        debug!(
            "search {query:?} ({}) collected {} items over {} pages",
            scope.as_str(),
            items.len(),
            cursor.pages_seen()
        );
        Ok(items)
    }
}

/// Flatten one page's data into the collected items.
///
/// Listing pages put their hits under `results`; some return a bare list.
fn collect_results(items: &mut Vec<Value>, data: Value) {
    match data {
        Value::Array(list) => items.extend(list),
        Value::Object(mut map) => {
            if let Some(Value::Array(list)) = map.remove("results") {
                items.extend(list);
            } else {
                items.push(Value::Object(map));
            }
        }
        Value::Null => {}
        other => items.push(other),
    }
}
