//! End-to-end tests against a mock API
//!
//! Drives the full stack — transport, session echo, envelope resolution,
//! bookmark pagination, providers — over the wire format the real endpoints
//! speak.

use pinbot::{ApiClient, ApiResponse, BookmarkCursor, HttpClientConfig, NextPage};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_RESOURCE: &str = "/resource/BaseSearchResource/get/";

fn test_client(server: &MockServer) -> ApiClient {
    ApiClient::with_config(
        HttpClientConfig::builder()
            .base_url(server.uri())
            .no_rate_limit()
            .build(),
    )
}

fn listing_page(results: Value, bookmarks: Value) -> Value {
    json!({
        "resource": {"options": {"bookmarks": bookmarks}},
        "resource_response": {"data": {"results": results}},
        "client_context": {"country": "US"}
    })
}

#[tokio::test]
async fn multi_page_search_over_the_wire_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_RESOURCE))
        .and(query_param_contains("data", "bm_2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing_page(json!([{"id": "pin_3"}]), json!([]))),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_RESOURCE))
        .and(query_param_contains("data", "\"scope\":\"pins\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_page(
            json!([{"id": "pin_1"}, {"id": "pin_2"}]),
            json!(["bm_2"]),
        )))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let items = client.search().pins("rust art", 0).await.unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], "pin_1");
    assert_eq!(items[2]["id"], "pin_3");
}

#[tokio::test]
async fn embedded_api_error_is_state_not_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_RESOURCE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resource_response": {"error": {"message": "Something went wrong"}}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);

    // Providers complete without a transport error...
    let items = client.search().pins("anything", 0).await.unwrap();
    assert!(items.is_empty());

    // ...and the raw state is queryable through the core directly.
    let payload = client
        .http()
        .get_value(SEARCH_RESOURCE, pinbot::RequestConfig::new())
        .await
        .unwrap();
    let mut response = ApiResponse::new();
    response.fill(payload);

    assert!(response.has_errors());
    assert!(response.is_empty());
    assert_eq!(
        response.get_last_error().unwrap().message,
        "Something went wrong"
    );
}

#[tokio::test]
async fn csrf_token_is_echoed_across_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_RESOURCE))
        .and(header("X-CSRFToken", "wire_token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing_page(json!([{"id": "authed"}]), json!([]))),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_RESOURCE))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "csrftoken=wire_token; Path=/")
                .set_body_json(listing_page(json!([{"id": "first"}]), json!([]))),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);

    let first = client.search().pins("one", 0).await.unwrap();
    assert_eq!(first[0]["id"], "first");
    assert_eq!(
        client.http().session().csrf_token(),
        Some("wire_token".to_string())
    );

    let second = client.search().pins("two", 0).await.unwrap();
    assert_eq!(second[0]["id"], "authed");
}

#[tokio::test]
async fn manual_cursor_loop_matches_provider_behavior() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_RESOURCE))
        .and(query_param_contains("data", "manual_bm"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing_page(json!([{"id": 2}]), json!([]))),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_RESOURCE))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing_page(json!([{"id": 1}]), json!(["manual_bm"]))),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut cursor = BookmarkCursor::new();
    let mut response = ApiResponse::new();
    let mut pages = Vec::new();

    while let NextPage::Continue { bookmarks } = cursor.next_page() {
        let mut options = serde_json::Map::new();
        options.insert("scope".to_string(), json!("pins"));
        options.insert("query".to_string(), json!("manual"));
        let data = pinbot::query::data_param(options, &bookmarks).unwrap();

        let body = client
            .http()
            .get_text(
                SEARCH_RESOURCE,
                pinbot::RequestConfig::new()
                    .query("source_url", "/search/pins/?q=manual")
                    .query("data", data),
            )
            .await
            .unwrap();
        response.fill_from_json(&body);

        if let Some(page) = cursor.observe(&response) {
            pages.push(page.data);
        }
    }

    assert_eq!(pages.len(), 2);
    assert!(cursor.is_done());
    assert_eq!(cursor.pages_seen(), 2);

    // The client context rides along on every page.
    assert_eq!(response.get_client_info().get("country"), Some(&json!("US")));
}
