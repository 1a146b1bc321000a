//! Paginator
//!
//! Pages are 1-indexed. The current page always lies in
//! `[1, max(1, ceil(total / page_size))]` once clamped against a total.

use serde::Serialize;

/// Rows per page on every list screen
pub const PAGE_SIZE: usize = 10;

/// Visible window over a filtered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub page: usize,
    /// Inclusive start index into the filtered set
    pub start: usize,
    /// Exclusive end index, already capped at `total`
    pub end: usize,
    pub total: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Current page plus page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// A zero page size is treated as one
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` rows, never less than one
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Back to the first page (every filter change does this)
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull the current page back into range after the total shrank
    pub fn clamp(&mut self, total: usize) {
        self.current_page = self.current_page.clamp(1, self.page_count(total));
    }

    /// Advance one page; returns false (and does nothing) on the last page
    pub fn next(&mut self, total: usize) -> bool {
        if self.window(total).has_next {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; returns false (and does nothing) on page one
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a page, clamped into range
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.current_page = page;
        self.clamp(total);
    }

    pub fn window(&self, total: usize) -> PageWindow {
        let raw_start = (self.current_page - 1) * self.page_size;
        let raw_end = raw_start + self.page_size;
        let start = raw_start.min(total);
        let end = raw_end.min(total);

        PageWindow {
            page: self.current_page,
            start,
            end,
            total,
            has_prev: total > 0 && self.current_page > 1,
            has_next: raw_end < total,
        }
    }
}
