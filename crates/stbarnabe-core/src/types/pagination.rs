//! Pagination types for list endpoints.
//!
//! Page numbers are 0-based on the wire and in [`PageRequest`].

use serde::{Deserialize, Serialize};

use super::sorting::SortField;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-based).
    pub page: u64,
    /// Number of items per page (at least 1).
    pub size: u64,
    /// Ordering, applied in sequence.
    #[serde(default)]
    pub sort: Vec<SortField>,
}

impl PageRequest {
    /// Create a new unsorted page request.
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: Vec::new(),
        }
    }

    /// Attach an ordering.
    pub fn with_sort(mut self, sort: Vec<SortField>) -> Self {
        self.sort = sort;
        self
    }

    /// Calculate the SQL `OFFSET` value, capped at `i64::MAX`.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(i64::MAX as u64)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// A bounded, ordered slice of a larger result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, in store order.
    pub content: Vec<T>,
    /// Page number (0-based).
    pub number: u64,
    /// Requested page size.
    pub size: u64,
    /// Total number of items across all pages.
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Create a page for the given request.
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    /// Create an empty page.
    pub fn empty(request: &PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Total number of pages (0 when there is no element).
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.size)
    }

    /// Whether a page follows this one.
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages().saturating_sub(1)
    }

    /// Whether a page precedes this one.
    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    /// Index of the last page, 0 when empty.
    pub fn last_page(&self) -> u64 {
        self.total_pages().saturating_sub(1)
    }

    /// Transform the content while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
