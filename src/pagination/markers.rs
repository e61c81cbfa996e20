//! Page marker generation
//!
//! Decides which page buttons and ellipsis gaps a pager shows.

use serde::{Serialize, Serializer};

/// Pages shown on each side of the current page unless configured otherwise
pub const DEFAULT_SIBLING_COUNT: u32 = 1;

/// One element of a rendered pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A 1-based page number
    Page(u32),
    /// A gap of one or more hidden pages
    Ellipsis,
}

impl PageMarker {
    pub fn page(&self) -> Option<u32> {
        match self {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }
}

/// Pages serialize as bare numbers and gaps as the string "ellipsis"
impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageMarker::Page(n) => serializer.serialize_u32(*n),
            PageMarker::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Markers plus the Previous/Next button state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
    pub markers: Vec<PageMarker>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Clamp pager input into a usable range
///
/// `total_pages` of 0 is treated as a single page and `current_page` is
/// pulled into `[1, total_pages]`.
pub(crate) fn clamp_position(current_page: u32, total_pages: u32) -> (u32, u32) {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);
    if total != total_pages || current != current_page {
        tracing::debug!(
            current_page,
            total_pages,
            clamped_current = current,
            clamped_total = total,
            "Pager position out of range; clamped"
        );
    }
    (current, total)
}

/// Build the ordered page markers for a pager
///
/// Page 1 is always present, and so is the last page when there is more
/// than one. The sibling window around the current page never overlaps
/// the first or last page, so no page number appears twice.
pub fn build_page_markers(current_page: u32, total_pages: u32, sibling_count: u32) -> Vec<PageMarker> {
    let (current, total) = clamp_position(current_page, total_pages);

    // Signed and wide so `current - siblings` and `total - 1` cannot wrap.
    let current = i64::from(current);
    let total = i64::from(total);
    let siblings = i64::from(sibling_count);

    let left = (current - siblings).max(2);
    let right = (current + siblings).min(total - 1);

    let mut markers = vec![PageMarker::Page(1)];

    if left > 2 {
        markers.push(PageMarker::Ellipsis);
    }

    // Bounded by `total`, which came from a u32.
    markers.extend((left..=right).map(|page| PageMarker::Page(page as u32)));

    if right < total - 1 {
        markers.push(PageMarker::Ellipsis);
    }

    if total > 1 {
        markers.push(PageMarker::Page(total as u32));
    }

    markers
}

/// Build markers together with Previous/Next availability
pub fn pagination_state(current_page: u32, total_pages: u32, sibling_count: u32) -> PaginationState {
    let (current, total) = clamp_position(current_page, total_pages);

    PaginationState {
        current_page: current,
        total_pages: total,
        markers: build_page_markers(current, total, sibling_count),
        has_previous: current > 1,
        has_next: current < total,
    }
}
