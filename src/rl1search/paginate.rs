//! Page arithmetic for the sorted view.

use serde::{Deserialize, Serialize};
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based page number and page size. Both are kept at 1 or above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// `ceil(count / page_size)`; zero when nothing matched.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Indices `[(page - 1) * size, min(page * size, count))`, empty past the
    /// last page.
    pub fn range(&self, count: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size).min(count);
        let end = self.page.saturating_mul(self.page_size).min(count);
        start..end
    }
}

/// The current page of `items`.
pub fn paginate<T>(items: &[T], state: PageState) -> &[T] {
    &items[state.range(items.len())]
}
