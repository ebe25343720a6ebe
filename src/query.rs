//! Request construction
//!
//! Every endpoint of this API takes the same wire form: a url-encoded pair
//! of `source_url` (the page the web app would be showing) and `data` (a
//! JSON document `{"options": {...}, "context": {}}`). Listing endpoints
//! additionally merge the previous response's bookmarks into
//! `options.bookmarks`. GET requests carry the pair as the query string,
//! write endpoints carry it as a form body.

use crate::error::Result;
use crate::types::JsonObject;
use serde_json::{json, Value};
use url::form_urlencoded;

/// Assemble the `data` document for one request.
///
/// Bookmarks, when present, ride inside `options`.
pub fn request_payload(mut options: JsonObject, bookmarks: &[String]) -> Value {
    if !bookmarks.is_empty() {
        options.insert("bookmarks".to_string(), json!(bookmarks));
    }
    json!({
        "options": Value::Object(options),
        "context": {}
    })
}

/// The JSON-encoded `data` parameter value for one request.
pub fn data_param(options: JsonObject, bookmarks: &[String]) -> Result<String> {
    Ok(serde_json::to_string(&request_payload(options, bookmarks))?)
}

/// Build the full url-encoded request string (GET query or POST body).
pub fn create_query(options: JsonObject, source_url: &str, bookmarks: &[String]) -> Result<String> {
    let data = data_param(options, bookmarks)?;
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair("source_url", source_url)
        .append_pair("data", &data)
        .finish();
    Ok(encoded)
}
