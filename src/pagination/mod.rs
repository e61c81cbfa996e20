//! Pagination module
//!
//! Pager marker sequences and result range arithmetic.

pub mod markers;
pub mod page_info;

pub use markers::{
    build_page_markers, pagination_state, PageMarker, PaginationState,
    DEFAULT_SIBLING_COUNT,
};
pub use page_info::{compute_page_info, total_pages, PageInfo, PageRequest, PaginationError};
