//! Collection pagination
//!
//! The API pages collections with an opaque offset cursor: a response
//! carries `next_page.offset` alongside `data` while more items remain.
//! These helpers walk that cursor. They live on [`HttpDispatcher`] because
//! the envelope is a transport concern; the resource accessors return
//! single responses unchanged and never paginate on their own.

use crate::dispatcher::{HttpDispatcher, Params};
use anyhow::Result;
use futures::stream::{self, Stream};
use reqwest::Method;
use serde_json::Value;
use std::collections::VecDeque;

/// Page size requested when the caller does not set `limit`.
const DEFAULT_PAGE_SIZE: u64 = 100;

/// One page of a collection.
#[derive(Debug)]
pub struct Page {
    /// Items in this page.
    pub items: Vec<Value>,
    /// Cursor for the next page, absent on the last one.
    pub next_offset: Option<String>,
}

impl Page {
    /// Split a response envelope into items and the next-page cursor.
    fn from_envelope(envelope: Value) -> Self {
        let next_offset = envelope
            .get("next_page")
            .and_then(|page| page.get("offset"))
            .and_then(|offset| offset.as_str())
            .map(|offset| offset.to_string());

        let items = match envelope {
            Value::Object(mut envelope) => match envelope.remove("data") {
                Some(Value::Array(items)) => items,
                Some(Value::Null) | None => Vec::new(),
                Some(single) => vec![single],
            },
            _ => Vec::new(),
        };

        Page { items, next_offset }
    }
}

impl HttpDispatcher {
    /// Fetch one page of a collection.
    ///
    /// Injects a default `limit` unless `params` already sets one; the
    /// server rejects unpaged collection reads above its own cap.
    pub async fn get_page(
        &self,
        path: &str,
        params: Option<&Params>,
        offset: Option<&str>,
    ) -> Result<Page> {
        let mut page_params = params.cloned().unwrap_or_default();
        if !page_params.contains_key("limit") {
            page_params.insert("limit".to_string(), Value::from(DEFAULT_PAGE_SIZE));
        }
        if let Some(offset) = offset {
            page_params.insert("offset".to_string(), Value::from(offset));
        }

        let envelope = self
            .request(Method::GET, path, Some(&page_params), None)
            .await?;
        Ok(Page::from_envelope(envelope))
    }
}

/// Fetch every page of a collection into one vector.
///
/// Stops at the first page without a cursor. A failed page fails the whole
/// read; partial results are never returned.
pub async fn fetch_all(
    dispatcher: &HttpDispatcher,
    path: &str,
    params: Option<&Params>,
) -> Result<Vec<Value>> {
    let mut all_items = Vec::new();
    let mut offset: Option<String> = None;

    loop {
        let page = dispatcher.get_page(path, params, offset.as_deref()).await?;
        all_items.extend(page.items);

        if page.next_offset.is_none() {
            break;
        }
        offset = page.next_offset;
    }

    Ok(all_items)
}

/// Stream a collection item by item, fetching pages lazily.
///
/// Pages are requested only as the stream is polled past them, so a caller
/// that stops early never pays for the tail of the collection.
pub fn stream<'a>(
    dispatcher: &'a HttpDispatcher,
    path: &'a str,
    params: Option<&'a Params>,
) -> impl Stream<Item = Result<Value>> + 'a {
    struct State {
        buffer: VecDeque<Value>,
        offset: Option<String>,
        exhausted: bool,
    }

    let state = State {
        buffer: VecDeque::new(),
        offset: None,
        exhausted: false,
    };

    stream::try_unfold(state, move |mut state| async move {
        loop {
            if let Some(item) = state.buffer.pop_front() {
                return Ok(Some((item, state)));
            }
            if state.exhausted {
                return Ok(None);
            }

            let page = dispatcher
                .get_page(path, params, state.offset.as_deref())
                .await?;
            state.offset = page.next_offset;
            state.exhausted = state.offset.is_none();
            state.buffer.extend(page.items);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_with_cursor_splits_cleanly() {
        let page = Page::from_envelope(json!({
            "data": [{ "id": 1 }, { "id": 2 }],
            "next_page": { "offset": "abc123", "path": "/projects?offset=abc123" }
        }));

        assert_eq!(page.items, vec![json!({ "id": 1 }), json!({ "id": 2 })]);
        assert_eq!(page.next_offset.as_deref(), Some("abc123"));
    }

    #[test]
    fn envelope_without_cursor_is_the_last_page() {
        let page = Page::from_envelope(json!({ "data": [{ "id": 3 }] }));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.next_offset, None);
    }

    #[test]
    fn single_record_envelope_becomes_one_item() {
        let page = Page::from_envelope(json!({ "data": { "id": 9 } }));
        assert_eq!(page.items, vec![json!({ "id": 9 })]);
    }

    #[test]
    fn empty_and_malformed_envelopes_yield_no_items() {
        assert!(Page::from_envelope(json!({ "data": null })).items.is_empty());
        assert!(Page::from_envelope(json!({})).items.is_empty());
        assert!(Page::from_envelope(Value::Null).items.is_empty());
    }
}
