use serde::Deserialize;

use crate::domain::page::Page;

/// Paged envelope as the remote API serializes it. The API also sends
/// `hasNext`/`hasPrevious`/`isFirst`/`isLast` flags, but the two table
/// implementations in earlier front ends disagreed on them, so conversion
/// re-derives the flags from the index and page count instead of reading
/// them.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponseDto<T> {
    pub data: Vec<T>,
    pub total_elements: usize,
    pub page_number: usize,
    pub total_pages: usize,
}

impl<T> From<PagedResponseDto<T>> for Page<T> {
    fn from(dto: PagedResponseDto<T>) -> Self {
        Page::new(dto.data, dto.total_elements, dto.page_number, dto.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_flags_are_rederived() {
        let body = r#"{
            "data": [1, 2, 3],
            "totalElements": 25,
            "pageNumber": 0,
            "totalPages": 3,
            "hasNext": false,
            "hasPrevious": true,
            "isFirst": false,
            "isLast": true
        }"#;

        let dto: PagedResponseDto<i32> = serde_json::from_str(body).unwrap();
        let page: Page<i32> = dto.into();

        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(!page.has_previous);
    }
}
