//! Listing query parameters

use serde_json::Value;
use std::collections::BTreeMap;

/// Query parameter names
pub const PAGE_PARAM: &str = "page";
pub const SIZE_PARAM: &str = "size";
pub const SORT_PARAM: &str = "sort";
pub const FILTERS_PARAM: &str = "filters";

/// Optional query for a listing call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetParams {
    /// First page to fetch
    pub page: Option<u32>,
    /// Page size
    pub size: Option<u32>,
    /// Sort expression, passed through as is
    pub sort: Option<String>,
    /// Field filters, sent as `key:value` pairs in key order
    pub filters: BTreeMap<String, Value>,
}

impl GetParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Add a filter
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Serialize to query parameters
    pub fn to_query(&self) -> BTreeMap<String, String> {
        let mut query = BTreeMap::new();
        if let Some(page) = self.page {
            query.insert(PAGE_PARAM.to_string(), page.to_string());
        }
        if let Some(size) = self.size {
            query.insert(SIZE_PARAM.to_string(), size.to_string());
        }
        if let Some(sort) = &self.sort {
            query.insert(SORT_PARAM.to_string(), sort.clone());
        }
        if !self.filters.is_empty() {
            query.insert(FILTERS_PARAM.to_string(), self.filters_string());
        }
        query
    }

    /// `key:value` pairs joined by commas
    pub fn filters_string(&self) -> String {
        self.filters
            .iter()
            .map(|(key, value)| match value {
                Value::String(s) => format!("{key}:{s}"),
                other => format!("{key}:{other}"),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
