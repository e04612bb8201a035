//! Pagination module
//!
//! Listing endpoints are page-number paginated and report
//! `{page, size, total}` in the response metadata.
//!
//! # Overview
//!
//! [`GetParams`] is the caller-facing query (page, size, sort, filters).
//! [`collect_pages`] drives the requests: it asks for `page + 1` after each
//! response and stops once it holds at least `total` items.

mod driver;
mod types;

pub use driver::{collect_pages, PaginationState};
pub use types::GetParams;
