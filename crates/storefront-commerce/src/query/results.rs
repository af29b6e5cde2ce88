//! Catalog pages and pagination.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items after filtering.
    pub total: i64,
    /// Total number of pages; 0 when nothing matched.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    ///
    /// Pages below 1 clamp to 1. An empty result set (or a non-positive page
    /// size) has zero pages, not one.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let page = page.max(1);
        let total_pages = if per_page <= 0 || total <= 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Get the index of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page.max(0))
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<i64> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = (self.page - half as i64).max(1);
        let end = (start + max_visible as i64 - 1).min(self.total_pages);
        let start = (end - max_visible as i64 + 1).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed), 0 when empty.
    pub fn start_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> i64 {
        (self.offset() + self.per_page.max(0)).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 24, 0)
    }
}

/// One visible page of catalog results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogPage {
    /// The products on this page, filtered and sorted.
    pub items: Vec<Product>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl CatalogPage {
    /// Create an empty page.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_first_page() {
        let p = Pagination::new(1, 10, 45);
        assert!(!p.has_prev);
        assert!(p.has_next);
        assert!(p.is_first());
        assert!(!p.is_last());
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert!(!p.is_first());
        assert!(p.is_last());
    }

    #[test]
    fn test_pagination_empty_set_has_zero_pages() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert_eq!(p.start_item(), 0);
    }

    #[test]
    fn test_pagination_exact_multiple() {
        let p = Pagination::new(1, 10, 40);
        assert_eq!(p.total_pages, 4);
    }

    #[test]
    fn test_pagination_non_positive_per_page() {
        let p = Pagination::new(1, 0, 45);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_pagination_page_clamps_to_one() {
        let p = Pagination::new(0, 10, 45);
        assert_eq!(p.page, 1);
        let p = Pagination::new(-5, 10, 45);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(1, 10, 30);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_item_range() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);

        let p = Pagination::new(5, 10, 45);
        assert_eq!(p.end_item(), 45);
    }

    #[test]
    fn test_empty_page() {
        let page = CatalogPage::empty();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.pagination.total_pages, 0);
    }
}
