//! Page arithmetic for skip/limit list endpoints.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

pub const PAGE_SIZES: [u64; 3] = [10, 20, 50];

/// One-based page cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: u64,
    pub page_size: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 1, page_size: PAGE_SIZES[0] }
    }
}

impl Pager {
    pub fn skip(self) -> u64 {
        self.page.saturating_sub(1) * self.page_size
    }

    pub fn limit(self) -> u64 {
        self.page_size
    }

    /// At least one page, even for an empty result.
    pub fn page_count(self, total: u64) -> u64 {
        total.div_ceil(self.page_size.max(1)).max(1)
    }

    #[must_use]
    pub fn next(self, total: u64) -> Self {
        Self { page: (self.page + 1).min(self.page_count(total)), ..self }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self { page: self.page.saturating_sub(1).max(1), ..self }
    }

    /// Changing the page size returns to the first page.
    #[must_use]
    pub fn with_page_size(self, page_size: u64) -> Self {
        Self { page: 1, page_size: page_size.max(1) }
    }
}
