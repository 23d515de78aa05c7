//! Client-side paging over the displayed rows.

use std::ops::Range;

/// Rows per page.
pub const PAGE_SIZE: usize = 50;

/// 1-based "first to last of total" line shown under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub first_row: usize,
    pub last_row: usize,
    pub total: usize,
}

/// Current page over a sequence of `total` displayed rows.
///
/// Navigation methods take the current total so the page never points past
/// the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Never less than one, so an empty table still reads "Page 1 of 1".
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self, total: usize) -> bool {
        self.page + 1 >= self.page_count(total)
    }

    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(self.page_count(total) - 1);
    }

    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page;
        self.clamp(total);
    }

    pub fn first(&mut self) {
        self.page = 0;
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        self.go_to(self.page + 1, total);
    }

    pub fn last(&mut self, total: usize) {
        self.page = self.page_count(total) - 1;
    }

    /// Positions of the current page within the displayed rows.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn summary(&self, total: usize) -> PageSummary {
        let range = self.range(total);
        if range.is_empty() {
            return PageSummary {
                first_row: 0,
                last_row: 0,
                total,
            };
        }
        PageSummary {
            first_row: range.start + 1,
            last_row: range.end,
            total,
        }
    }
}
