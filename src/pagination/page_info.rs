//! Result range arithmetic
//!
//! "Showing X-Y of Z results" and page counts.

use serde::Serialize;
use thiserror::Error;

/// Pagination request errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("total_pages must be at least 1")]
    NoPages,

    #[error("current_page {current_page} is outside 1..={total_pages}")]
    PageOutOfRange { current_page: u32, total_pages: u32 },

    #[error("page_size must be greater than 0")]
    InvalidPageSize,
}

/// A pager position checked against its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub current_page: u32,
    pub total_pages: u32,
    pub sibling_count: u32,
}

impl PageRequest {
    /// Validate a pager position instead of clamping it
    pub fn new(current_page: u32, total_pages: u32, sibling_count: u32) -> Result<Self, PaginationError> {
        if total_pages == 0 {
            return Err(PaginationError::NoPages);
        }
        if current_page == 0 || current_page > total_pages {
            return Err(PaginationError::PageOutOfRange { current_page, total_pages });
        }
        Ok(Self { current_page, total_pages, sibling_count })
    }
}

/// 1-based inclusive item range shown on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub start: u64,
    pub end: u64,
}

/// Compute the item range displayed on `current_page`
///
/// The end is clamped to `total_items` on a short last page.
pub fn compute_page_info(current_page: u32, page_size: u32, total_items: u64) -> PageInfo {
    let current = u64::from(current_page);
    let size = u64::from(page_size);

    let start = current.saturating_sub(1).saturating_mul(size).saturating_add(1);
    let end = current.saturating_mul(size).min(total_items);

    PageInfo { start, end }
}

/// Number of pages needed for `total_items`, never less than one
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_items.div_ceil(u64::from(page_size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_last_page_clamped() {
        assert_eq!(compute_page_info(10, 10, 95), PageInfo { start: 91, end: 95 });
    }

    #[test]
    fn test_page_info_full_pages() {
        assert_eq!(compute_page_info(1, 10, 95), PageInfo { start: 1, end: 10 });
        assert_eq!(compute_page_info(3, 25, 200), PageInfo { start: 51, end: 75 });
    }

    #[test]
    fn test_page_info_large_values_do_not_overflow() {
        let info = compute_page_info(u32::MAX, u32::MAX, u64::MAX);
        assert_eq!(info.end, u64::from(u32::MAX) * u64::from(u32::MAX));
        assert!(info.start <= info.end);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(50, 0), 1);
        assert_eq!(total_pages(u64::MAX, 1), u32::MAX);
    }

    #[test]
    fn test_page_request_validation() {
        assert!(PageRequest::new(1, 1, 1).is_ok());
        assert_eq!(PageRequest::new(1, 0, 1), Err(PaginationError::NoPages));
        assert_eq!(
            PageRequest::new(0, 5, 1),
            Err(PaginationError::PageOutOfRange { current_page: 0, total_pages: 5 })
        );
        assert_eq!(
            PageRequest::new(6, 5, 1),
            Err(PaginationError::PageOutOfRange { current_page: 6, total_pages: 5 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = PaginationError::PageOutOfRange { current_page: 6, total_pages: 5 };
        assert_eq!(err.to_string(), "current_page 6 is outside 1..=5");
    }
}
