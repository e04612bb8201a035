//! Page-number pagination driver

use super::types::PAGE_PARAM;
use crate::decode::{Page, PaginationMetadata};
use crate::error::Result;
use std::collections::BTreeMap;
use std::future::Future;
use tracing::{debug, warn};

/// Tracks progress through a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Requests issued so far
    pub pages_fetched: u32,
    /// Items received so far
    pub total_fetched: u64,
    /// Latest total reported by the server
    pub total: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page and decide whether another request is needed.
    ///
    /// The latest reported total is authoritative, even if it shrank since
    /// the previous page. An empty page also ends the listing, since asking
    /// again would return the same thing.
    pub fn record(&mut self, metadata: &PaginationMetadata, count: usize) -> bool {
        self.pages_fetched += 1;
        self.total_fetched += count as u64;
        self.total = metadata.total;

        if self.total_fetched >= self.total {
            self.done = true;
        } else if count == 0 {
            warn!(
                fetched = self.total_fetched,
                total = self.total,
                "empty page before reaching the reported total, stopping"
            );
            self.done = true;
        }
        !self.done
    }
}

/// Fetch every page of a listing.
///
/// `fetch` is called with the query for each page, starting with `query`
/// unchanged. Items are returned in arrival order.
pub async fn collect_pages<T, F, Fut>(
    mut query: BTreeMap<String, String>,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(BTreeMap<String, String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut state = PaginationState::new();

    loop {
        let page = fetch(query.clone()).await?;
        let count = page.items.len();
        items.extend(page.items);

        debug!(
            page = page.pagination.page,
            count,
            total = page.pagination.total,
            "fetched page"
        );

        let next = page.pagination.page.saturating_add(1);
        query.insert(PAGE_PARAM.to_string(), next.to_string());

        if !state.record(&page.pagination, count) {
            break;
        }
    }

    Ok(items)
}
