//! Generic page-of-results type shared by every listing endpoint.

use serde::Serialize;

/// One page of entities plus the pagination metadata needed to render
/// navigation controls. Page indices are zero-based everywhere; templates
/// add one for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub page_index: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Builds a page, deriving the navigation flags from the index and page
    /// count rather than trusting whatever the backend sent alongside them.
    pub fn new(items: Vec<T>, total_items: usize, page_index: usize, total_pages: usize) -> Self {
        let has_previous = total_pages > 0 && page_index > 0;
        let has_next = total_pages > 0 && page_index + 1 < total_pages;
        Self {
            items,
            total_items,
            page_index,
            total_pages,
            has_next,
            has_previous,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_on_first_of_three_pages() {
        let page = Page::new(vec![1, 2, 3], 25, 0, 3);
        assert!(page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_flags_on_middle_page() {
        let page = Page::new(vec![1], 25, 1, 3);
        assert!(page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_flags_on_last_page() {
        let page = Page::new(vec![1], 25, 2, 3);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_empty_page_has_no_navigation() {
        let page = Page::<i32>::empty();
        assert!(page.is_empty());
        assert!(!page.has_next);
        assert!(!page.has_previous);
        assert_eq!(page.total_pages, 0);
    }
}
