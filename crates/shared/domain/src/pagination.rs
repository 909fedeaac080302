//! Offset pagination value types.
//!
//! `PageRequest` describes which slice of a collection is wanted and `Page<T>`
//! carries that slice together with the size of the whole collection. Both are
//! plain values: no I/O, no clamping.

use thiserror::Error;

/// Errors raised while building pagination values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must be greater or equal than 0")]
    PageMustBeNonNegative,

    #[error("size must be greater or equal than 0")]
    SizeMustBeNonNegative,

    #[error("total elements must be greater or equal than 0")]
    NegativeTotalElements,
}

/// A request for one page of a collection (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i32,
    size: i32,
}

impl PageRequest {
    /// Create a page request. Negative values are rejected, page first.
    pub fn new(page: i32, size: i32) -> Result<Self, PaginationError> {
        if page < 0 {
            return Err(PaginationError::PageMustBeNonNegative);
        }

        if size < 0 {
            return Err(PaginationError::SizeMustBeNonNegative);
        }

        Ok(Self { page, size })
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of rows to skip before this page.
    ///
    /// Computed in 64 bits, so `i32::MAX * i32::MAX` still fits.
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    /// Maximum number of rows this page may hold.
    pub fn limit(&self) -> u64 {
        self.size as u64
    }
}

/// One page of results plus the total element count of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    page_request: PageRequest,
    total_elements: i64,
}

impl<T> Page<T> {
    /// Create a page. `content` is kept in the order given.
    pub fn new(
        content: Vec<T>,
        page_request: PageRequest,
        total_elements: i64,
    ) -> Result<Self, PaginationError> {
        if total_elements < 0 {
            return Err(PaginationError::NegativeTotalElements);
        }

        Ok(Self {
            content,
            page_request,
            total_elements,
        })
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn page_request(&self) -> PageRequest {
        self.page_request
    }

    /// Page index (0-indexed).
    pub fn number(&self) -> i32 {
        self.page_request.page()
    }

    /// Requested page size (not the number of elements on this page).
    pub fn size(&self) -> i32 {
        self.page_request.size()
    }

    pub fn total_elements(&self) -> i64 {
        self.total_elements
    }

    /// `ceil(total_elements / size)`, or 0 when the page size is 0.
    pub fn total_pages(&self) -> i64 {
        let size = i64::from(self.size());
        if size > 0 {
            (self.total_elements + size - 1) / size
        } else {
            0
        }
    }

    pub fn is_first(&self) -> bool {
        self.number() == 0
    }

    /// True for the last page, and for any page past the end.
    pub fn is_last(&self) -> bool {
        i64::from(self.number()) >= self.total_pages() - 1
    }

    /// Transform the content while keeping the pagination metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_request: self.page_request,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_offset() {
        for (page, size) in [(0, 0), (0, 20), (1, 20), (3, 7), (10, 0)] {
            let pr = PageRequest::new(page, size).unwrap();
            assert_eq!(pr.offset(), i64::from(page) * i64::from(size));
        }
    }

    #[test]
    fn test_page_request_offset_does_not_overflow() {
        let pr = PageRequest::new(i32::MAX, i32::MAX).unwrap();
        assert_eq!(pr.offset(), i64::from(i32::MAX) * i64::from(i32::MAX));
    }

    #[test]
    fn test_negative_page_rejected() {
        assert_eq!(
            PageRequest::new(-1, 20),
            Err(PaginationError::PageMustBeNonNegative)
        );
    }

    #[test]
    fn test_negative_size_rejected() {
        assert_eq!(
            PageRequest::new(0, -1),
            Err(PaginationError::SizeMustBeNonNegative)
        );
    }

    #[test]
    fn test_negative_total_elements_rejected() {
        let pr = PageRequest::new(0, 20).unwrap();
        let result = Page::<u8>::new(vec![], pr, -1);
        assert_eq!(result, Err(PaginationError::NegativeTotalElements));
    }

    #[test]
    fn test_total_pages() {
        let cases = [(0, 20, 0), (1, 20, 1), (20, 20, 1), (21, 20, 2), (100, 7, 15)];
        for (total, size, expected) in cases {
            let pr = PageRequest::new(0, size).unwrap();
            let page = Page::<u8>::new(vec![], pr, total).unwrap();
            assert_eq!(page.total_pages(), expected, "total={total} size={size}");
        }
    }

    #[test]
    fn test_total_pages_with_zero_size() {
        let pr = PageRequest::new(0, 0).unwrap();
        let page = Page::<u8>::new(vec![], pr, 42).unwrap();
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn test_first_and_last() {
        let pr = PageRequest::new(0, 20).unwrap();
        let empty = Page::<u8>::new(vec![], pr, 0).unwrap();
        assert!(empty.is_first());
        assert!(empty.is_last());

        let pr = PageRequest::new(1, 10).unwrap();
        let middle = Page::new(vec![1u8; 10], pr, 25).unwrap();
        assert!(!middle.is_first());
        assert!(!middle.is_last());

        let pr = PageRequest::new(2, 10).unwrap();
        let last = Page::new(vec![1u8; 5], pr, 25).unwrap();
        assert!(last.is_last());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let pr = PageRequest::new(1, 2).unwrap();
        let page = Page::new(vec![1, 2], pr, 5).unwrap();
        let mapped = page.map(|n| n.to_string());

        assert_eq!(mapped.content(), &["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.number(), 1);
        assert_eq!(mapped.size(), 2);
        assert_eq!(mapped.total_elements(), 5);
        assert_eq!(mapped.total_pages(), 3);
    }
}
