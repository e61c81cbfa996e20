//! Pagination MCP Tools
//!
//! Strictly validated wrappers around the pager calculations.

use serde::Serialize;

use crate::pagination::{
    compute_page_info, pagination_state, total_pages, PageRequest, PaginationError,
    PaginationState,
};

/// Response for compute_page_info
#[derive(Debug, Serialize)]
pub struct PageInfoResponse {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub start: u64,
    pub end: u64,
    pub summary: String,
}

/// Page markers and Previous/Next state for a pager position
pub fn page_markers(current_page: u32, total_pages: u32, sibling_count: u32) -> Result<PaginationState, String> {
    let request = PageRequest::new(current_page, total_pages, sibling_count)
        .map_err(|e| format!("Invalid page request: {}", e))?;

    Ok(pagination_state(
        request.current_page,
        request.total_pages,
        request.sibling_count,
    ))
}

/// Item range for a page of results
pub fn page_info(current_page: u32, page_size: u32, total_items: u64) -> Result<PageInfoResponse, String> {
    if page_size == 0 {
        return Err(format!("Invalid page request: {}", PaginationError::InvalidPageSize));
    }

    let pages = total_pages(total_items, page_size);
    PageRequest::new(current_page, pages, 0)
        .map_err(|e| format!("Invalid page request: {}", e))?;

    let info = compute_page_info(current_page, page_size, total_items);
    let summary = if total_items == 0 {
        "No results".to_string()
    } else {
        format!("Showing {}-{} of {} results", info.start, info.end, total_items)
    };

    Ok(PageInfoResponse {
        current_page,
        page_size,
        total_items,
        total_pages: pages,
        start: info.start,
        end: info.end,
        summary,
    })
}
