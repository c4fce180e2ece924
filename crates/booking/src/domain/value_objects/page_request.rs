//! PageRequest - Pagination parameters for list lookups

use serde::{Deserialize, Serialize};

/// Upper bound for a single page
pub const MAX_PAGE_SIZE: usize = 100;

/// Page request (1-indexed page number and page size)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    /// Create a page request for `page` (1-indexed) with `size` items per page
    pub fn of(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Page number, never below 1
    pub fn page_number(&self) -> usize {
        self.page.max(1)
    }

    /// Get clamped page size (respects MAX_PAGE_SIZE)
    pub fn page_size(&self) -> usize {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Number of items preceding this page
    pub fn offset(&self) -> usize {
        (self.page_number() - 1).saturating_mul(self.page_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_no_offset() {
        let page = PageRequest::of(1, 10);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.page_size(), 10);
    }

    #[test]
    fn test_page_zero_is_treated_as_first_page() {
        assert_eq!(PageRequest::of(0, 10).page_number(), 1);
        assert_eq!(PageRequest::of(0, 10).offset(), 0);
    }

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(PageRequest::of(1, 0).page_size(), 1);
        assert_eq!(PageRequest::of(1, 1_000).page_size(), MAX_PAGE_SIZE);
        assert_eq!(PageRequest::of(3, 25).offset(), 50);
    }

    #[test]
    fn test_offset_saturates_for_huge_pages() {
        assert_eq!(PageRequest::of(usize::MAX, 10).offset(), usize::MAX);
    }
}
