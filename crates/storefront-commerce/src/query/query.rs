//! Catalog query builder and execution.

use crate::catalog::Product;
use crate::query::filter::{CategoryFilter, PriceRange};
use crate::query::results::{CatalogPage, Pagination};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Sort options for catalog pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Keep the server-provided order (newest first).
    #[default]
    Latest,
    /// Sort by price, low to high.
    PriceLowHigh,
    /// Sort by price, high to low.
    PriceHighLow,
    /// Sort by name A-Z.
    Name,
    /// Sort by highest rated.
    Rating,
}

impl SortOrder {
    /// Parse the storefront's sort key. Unrecognized keys fall open to
    /// `Latest`, which leaves the input order untouched.
    pub fn from_key(key: &str) -> Self {
        match key {
            "price-low" => SortOrder::PriceLowHigh,
            "price-high" => SortOrder::PriceHighLow,
            "name" => SortOrder::Name,
            "rating" => SortOrder::Rating,
            _ => SortOrder::Latest,
        }
    }

    /// The storefront's sort key for this order.
    pub fn as_key(&self) -> &'static str {
        match self {
            SortOrder::Latest => "latest",
            SortOrder::PriceLowHigh => "price-low",
            SortOrder::PriceHighLow => "price-high",
            SortOrder::Name => "name",
            SortOrder::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Latest => "Latest",
            SortOrder::PriceLowHigh => "Price: Low to High",
            SortOrder::PriceHighLow => "Price: High to Low",
            SortOrder::Name => "Name: A-Z",
            SortOrder::Rating => "Highest Rated",
        }
    }
}

/// A catalog query: filters, sort, and pagination over a product snapshot.
///
/// Executing a query never mutates the snapshot and never fails; malformed
/// pieces of the query fall open to their permissive defaults at construction
/// time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogQuery {
    /// Case-insensitive substring search over name/description/category.
    pub search: Option<String>,
    /// Category selection.
    pub category: CategoryFilter,
    /// Inclusive price bounds.
    pub price_range: PriceRange,
    /// Minimum rating threshold; 0 disables the predicate.
    pub min_rating: f64,
    /// Only include products with stock remaining.
    pub in_stock_only: bool,
    /// Only include discounted products.
    pub on_sale_only: bool,
    /// Sort order.
    pub sort: SortOrder,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogQuery {
    /// Create a query with no active filters, sorted by `Latest`.
    pub fn new() -> Self {
        Self {
            search: None,
            category: CategoryFilter::All,
            price_range: PriceRange::unbounded(),
            min_rating: 0.0,
            in_stock_only: false,
            on_sale_only: false,
            sort: SortOrder::Latest,
            page: 1,
            per_page: 24,
        }
    }

    /// Set the search term. Empty terms are ignored.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        if !term.is_empty() {
            self.search = Some(term);
        }
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set the minimum rating threshold.
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    /// Only include in-stock products.
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Only include on-sale products.
    pub fn on_sale_only(mut self) -> Self {
        self.on_sale_only = true;
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination. Pages below 1 clamp to 1.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page;
        self
    }

    /// Check whether a product passes every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product) {
            return false;
        }
        if let Some(term) = &self.search {
            if !product.matches_search(&term.to_lowercase()) {
                return false;
            }
        }
        if !self.price_range.contains(product) {
            return false;
        }
        if self.min_rating > 0.0 && product.rating < self.min_rating {
            return false;
        }
        if self.in_stock_only && !product.is_in_stock() {
            return false;
        }
        if self.on_sale_only && !product.is_on_sale() {
            return false;
        }
        true
    }

    /// Run the query against a catalog snapshot.
    ///
    /// Filter, then stable-sort, then paginate. The snapshot is never
    /// mutated; calling twice with the same inputs yields the same page.
    /// A non-positive `per_page` yields an empty page, and a `page` past the
    /// end yields an empty page with valid pagination counts.
    pub fn execute(&self, products: &[Product]) -> CatalogPage {
        let mut filtered: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        // Vec's sort_by family is stable: equal keys keep their filtered order.
        match self.sort {
            SortOrder::Latest => {}
            SortOrder::PriceLowHigh => filtered.sort_by_key(|p| p.sort_price()),
            SortOrder::PriceHighLow => filtered.sort_by_key(|p| Reverse(p.sort_price())),
            SortOrder::Name => filtered.sort_by_cached_key(|p| p.name.to_lowercase()),
            SortOrder::Rating => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }

        let total = filtered.len() as i64;
        let pagination = Pagination::new(self.page, self.per_page, total);

        let items = if self.per_page <= 0 {
            Vec::new()
        } else {
            filtered
                .into_iter()
                .skip(pagination.offset() as usize)
                .take(self.per_page as usize)
                .collect()
        };

        tracing::debug!(
            total,
            page = pagination.page,
            returned = items.len(),
            sort = self.sort.as_key(),
            "catalog query executed"
        );

        CatalogPage { items, pagination }
    }
}
