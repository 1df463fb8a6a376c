//! Pagination contract shared by every list endpoint.
//!
//! Pages are zero-based. A request carries `page` (default 0) and `size`
//! (default 10); the response wraps the rows in a [`Page`] envelope with the
//! totals the caller needs to walk the result set.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query-string pagination parameters.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Zero-based page index
    #[serde(default)]
    pub page: u32,
    /// Rows per page
    #[serde(default = "default_page_size")]
    pub size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageQuery {
    /// Effective page size. A size of 0 is treated as 1 so LIMIT/OFFSET
    /// arithmetic never divides by zero.
    pub fn limit(&self) -> i64 {
        i64::from(self.size.max(1))
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * self.limit()
    }
}

/// One page of results plus the totals.
#[derive(Debug, Serialize, ToSchema)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_elements: i64,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, query: &PageQuery, total_elements: i64) -> Self {
        let size = query.size.max(1);
        let total_pages = (total_elements.max(0) as u64).div_ceil(u64::from(size)) as u32;
        Self {
            content,
            current_page: query.page,
            total_pages,
            total_elements,
            page_size: size,
        }
    }

    /// Convert the content rows, keeping the page bookkeeping.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            page_size: self.page_size,
        }
    }

}
