//! View model for windowed pagination controls.
//!
//! Page indices are zero-based end-to-end to match the backing API;
//! templates render `index + 1` as the label.

use serde::Serialize;

use crate::domain::page::Page;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of placeholder rows shown while a table partial is loading.
pub const SKELETON_ROWS: usize = 5;

/// Windowed list of zero-based page indices; `None` marks an ellipsis gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = left_edge.min(total_pages);
    pages.extend((0..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(total_pages);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(right_edge));

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..total_pages).map(Some));

    pages
}

#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Paginated<T> {
    pub fn new(page: Page<T>) -> Self {
        let pages = get_pages(page.total_pages, page.page_index, 2, 2, 4, 2);

        Self {
            items: page.items,
            pages,
            page: page.page_index,
            total_pages: page.total_pages,
            total_items: page.total_items,
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}

impl<T> From<Page<T>> for Paginated<T> {
    fn from(page: Page<T>) -> Self {
        Self::new(page)
    }
}
