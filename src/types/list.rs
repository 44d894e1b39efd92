//! Collection and deletion response types

use serde::{Deserialize, Serialize};

/// One page of a list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List<T> {
    /// Always `list`
    #[serde(default)]
    pub object: String,
    /// Objects on this page
    pub data: Vec<T>,
    /// Whether more objects exist after this page
    #[serde(default)]
    pub has_more: bool,
    /// URL of the list endpoint
    #[serde(default)]
    pub url: String,
}

impl<T> List<T> {
    /// Whether the page has no objects
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of objects on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// One page of a search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult<T> {
    /// Always `search_result`
    #[serde(default)]
    pub object: String,
    /// Matching objects on this page
    pub data: Vec<T>,
    /// Whether more results exist
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    /// Total number of matches, present when `total_count` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// URL of the search endpoint
    #[serde(default)]
    pub url: String,
}

/// Receipt returned when an object is deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    /// Identifier of the deleted object
    pub id: String,
    /// Type of the deleted object
    #[serde(default)]
    pub object: String,
    /// Always `true`
    #[serde(default)]
    pub deleted: bool,
}

/// Options sent next to a search query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Maximum number of results, between 1 and 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Cursor taken from a previous page's `next_page`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Response fields to expand, e.g. `total_count` or `data.customer`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl SearchParams {
    /// Create empty search options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue from a previous page
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Expand a response field
    pub fn with_expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }
}
