//! Envelope types

use serde::Deserialize;

/// The `{status, data, metadata}` wrapper of every response
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// `success` or `error`
    #[serde(default)]
    pub status: String,
    /// Error message, only present on failures
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub metadata: Option<ResponseMetadata>,
}

impl<T> Envelope<T> {
    /// Whether the envelope reports a failure despite a matching status code
    pub fn is_error(&self) -> bool {
        self.status.eq_ignore_ascii_case("error") || self.status.eq_ignore_ascii_case("fail")
    }
}

/// Metadata attached to listing responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub pagination: PaginationMetadata,
}

/// Position of a page in a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginationMetadata {
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

/// One decoded page of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zeroed when the response carried no metadata
    pub pagination: PaginationMetadata,
}
