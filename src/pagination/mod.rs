//! Bookmark pagination
//!
//! Supports: cursor-driven page loops over listing endpoints that return
//! opaque continuation tokens ("bookmarks") in the response body.
//!
//! # Overview
//!
//! Listing endpoints return each page's data together with the bookmarks to
//! echo into the next request. [`BookmarkCursor`] tracks that loop for the
//! caller: observe a normalized response, take the page, and ask whether
//! continuation is possible. Retry, backoff and page-count limits live with
//! the caller and the transport — the cursor only reports state.

mod cursor;
mod types;

pub use cursor::BookmarkCursor;
pub use types::{CursorPhase, NextPage};

#[cfg(test)]
mod tests;
