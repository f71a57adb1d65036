//! Shared request/response helpers used across all domain modules.

pub mod serde_util;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::http::ApiRequest;

// ─── PageRequest ─────────────────────────────────────────────────────────────

/// Page selection for list endpoints, sent as `page`/`size`/`sort` query params.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    /// Backend sort expression, e.g. `"date,desc"`.
    pub sort: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort: None,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    /// Default page for history endpoints, which use larger pages.
    pub fn history() -> Self {
        Self::new(0, 100)
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub(crate) fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query("page", self.page)
            .query("size", self.size)
            .query_opt("sort", self.sort.as_deref())
    }
}

// ─── Paged ───────────────────────────────────────────────────────────────────

/// Items of a list endpoint.
///
/// Accepts a Spring-style page object (`{"content": [...], ...}`) or a bare
/// JSON array. Any other shape decodes to an empty list. Malformed items are
/// still decode errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T>(pub Vec<T>);

impl<T> Paged<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Paged<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = match Value::deserialize(deserializer)? {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("content") {
                Some(Value::Array(items)) => items,
                _ => return Ok(Paged(Vec::new())),
            },
            _ => return Ok(Paged(Vec::new())),
        };
        serde_json::from_value(Value::Array(items))
            .map(Paged)
            .map_err(serde::de::Error::custom)
    }
}

// ─── ValueResponse ───────────────────────────────────────────────────────────

/// `{"value": x}` envelope used by single-number endpoints. A missing `value`
/// decodes to `T::default()`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueResponse<T> {
    #[serde(default)]
    pub value: T,
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Percent-encode a caller-supplied identifier for use as one path segment.
pub(crate) fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[test]
    fn test_paged_accepts_page_object_and_array() {
        let page: Paged<Item> = serde_json::from_str(r#"{"content":[{"id":1},{"id":2}],"totalPages":3}"#).unwrap();
        assert_eq!(page.0, vec![Item { id: 1 }, Item { id: 2 }]);

        let bare: Paged<Item> = serde_json::from_str(r#"[{"id":7}]"#).unwrap();
        assert_eq!(bare.into_inner(), vec![Item { id: 7 }]);
    }

    #[test]
    fn test_paged_other_shapes_are_empty() {
        let none: Paged<Item> = serde_json::from_str(r#"{"totalPages":0}"#).unwrap();
        assert!(none.0.is_empty());
        let scalar: Paged<Item> = serde_json::from_str("42").unwrap();
        assert!(scalar.0.is_empty());
    }

    #[test]
    fn test_paged_propagates_item_errors() {
        assert!(serde_json::from_str::<Paged<Item>>(r#"[{"id":"x"}]"#).is_err());
    }

    #[test]
    fn test_page_request_query() {
        let req = PageRequest::default().sort("date,desc").apply(ApiRequest::get("api/v2/indexes"));
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "0".to_string()),
                ("size".to_string(), "20".to_string()),
                ("sort".to_string(), "date,desc".to_string()),
            ]
        );
        assert_eq!(PageRequest::history().size, 100);
    }

    #[test]
    fn test_segment_encodes_reserved_chars() {
        assert_eq!(segment("ABC123"), "ABC123");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
