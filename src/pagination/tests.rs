//! Tests for bookmark pagination

use super::*;
use crate::response::ApiResponse;
use serde_json::{json, Value};

fn page_response(data: Value, bookmarks: Value) -> ApiResponse {
    let mut response = ApiResponse::new();
    response.fill(json!({
        "resource": {"options": {"bookmarks": bookmarks}},
        "resource_response": {"data": data}
    }));
    response
}

// ============================================================================
// NextPage Tests
// ============================================================================

#[test]
fn test_next_page_continue() {
    let next = NextPage::Continue {
        bookmarks: vec!["b1".to_string()],
    };
    assert!(next.is_continue());
    assert!(!next.is_done());
    assert_eq!(next.bookmarks(), ["b1"]);
}

#[test]
fn test_next_page_done() {
    let next = NextPage::Done;
    assert!(next.is_done());
    assert!(!next.is_continue());
    assert!(next.bookmarks().is_empty());
}

// ============================================================================
// Cursor Lifecycle
// ============================================================================

#[test]
fn test_fresh_cursor_starts_without_bookmarks() {
    let cursor = BookmarkCursor::new();
    assert_eq!(cursor.phase(), CursorPhase::Start);
    assert!(!cursor.is_done());
    assert_eq!(cursor.pages_seen(), 0);

    // First request of a loop carries no bookmarks.
    assert_eq!(
        cursor.next_page(),
        NextPage::Continue { bookmarks: vec![] }
    );
}

#[test]
fn test_cursor_continues_while_bookmarks_remain() {
    let mut cursor = BookmarkCursor::new();

    let page = cursor
        .observe(&page_response(json!([1, 2]), json!(["page_two"])))
        .unwrap();
    assert_eq!(page.data, json!([1, 2]));
    assert_eq!(page.bookmarks, ["page_two"]);

    assert_eq!(cursor.phase(), CursorPhase::HasMore);
    assert_eq!(cursor.pages_seen(), 1);
    assert_eq!(
        cursor.next_page(),
        NextPage::Continue {
            bookmarks: vec!["page_two".to_string()]
        }
    );
}

#[test]
fn test_cursor_terminates_on_empty_bookmarks() {
    let mut cursor = BookmarkCursor::new();

    cursor.observe(&page_response(json!([1]), json!(["more"])));
    let last = cursor
        .observe(&page_response(json!([2]), json!([])))
        .unwrap();

    // The terminal page still yields its data.
    assert_eq!(last.data, json!([2]));
    assert!(cursor.is_done());
    assert_eq!(cursor.pages_seen(), 2);
    assert_eq!(cursor.next_page(), NextPage::Done);
}

#[test]
fn test_cursor_terminates_on_missing_pagination_envelope() {
    let mut cursor = BookmarkCursor::new();

    let mut response = ApiResponse::new();
    response.fill(json!({"data": "not a listing"}));

    assert!(cursor.observe(&response).is_none());
    assert!(cursor.is_done());
    assert_eq!(cursor.pages_seen(), 0);
    assert!(cursor.bookmarks().is_empty());
}

#[test]
fn test_done_cursor_stays_done() {
    let mut cursor = BookmarkCursor::new();
    cursor.observe(&page_response(json!([]), json!([])));
    assert!(cursor.is_done());
    assert_eq!(cursor.next_page(), NextPage::Done);
}

#[test]
fn test_multi_page_walk() {
    let pages = [
        (json!(["a"]), json!(["bm1"])),
        (json!(["b"]), json!(["bm2"])),
        (json!(["c"]), json!([])),
    ];

    let mut cursor = BookmarkCursor::new();
    let mut collected = Vec::new();

    for (data, bookmarks) in pages {
        assert!(cursor.next_page().is_continue());
        if let Some(page) = cursor.observe(&page_response(data, bookmarks)) {
            collected.push(page.data);
        }
    }

    assert_eq!(collected, [json!(["a"]), json!(["b"]), json!(["c"])]);
    assert!(cursor.is_done());
    assert_eq!(cursor.pages_seen(), 3);
}
