//! Catalog filter types.

use crate::catalog::Product;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Category selection for a catalog query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,
    /// Match one category exactly.
    Only(String),
}

impl CategoryFilter {
    /// Parse the storefront's category key. `"all"` and the empty string
    /// select every category.
    pub fn from_key(key: &str) -> Self {
        if key.is_empty() || key.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(key.to_string())
        }
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

/// Inclusive price bounds for a catalog query.
///
/// `None` on either side means unbounded. Construction fails open:
/// malformed input from the range form yields an unbounded range rather
/// than an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PriceRange {
    /// Minimum price, inclusive.
    pub min: Option<Money>,
    /// Maximum price, inclusive.
    pub max: Option<Money>,
}

impl PriceRange {
    /// A range that matches every price.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create a range, falling open to unbounded when min exceeds max.
    pub fn new(min: Option<Money>, max: Option<Money>) -> Self {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo.amount_cents > hi.amount_cents || lo.currency != hi.currency {
                return Self::unbounded();
            }
        }
        Self { min, max }
    }

    /// Build a range from raw `[min, max]` form values.
    ///
    /// Anything that is not a two-element slice of finite numbers with
    /// min <= max falls open to unbounded.
    pub fn from_bounds(bounds: &[f64], currency: Currency) -> Self {
        let [lo, hi] = bounds else {
            return Self::unbounded();
        };
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Self::unbounded();
        }
        Self {
            min: Some(Money::from_decimal(*lo, currency)),
            max: Some(Money::from_decimal(*hi, currency)),
        }
    }

    /// Check whether this range has no effective bounds.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check whether a price in cents falls inside the range.
    pub fn contains_cents(&self, cents: i64) -> bool {
        if let Some(min) = self.min {
            if cents < min.amount_cents {
                return false;
            }
        }
        if let Some(max) = self.max {
            if cents > max.amount_cents {
                return false;
            }
        }
        true
    }

    /// Check whether a product's effective price falls inside the range.
    pub fn contains(&self, product: &Product) -> bool {
        self.contains_cents(product.sort_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn product(category: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new("p"),
            name: "Item".to_string(),
            description: None,
            category: category.to_string(),
            price: Some(Money::new(cents, Currency::USD)),
            original_price: None,
            stock: 1,
            rating: 0.0,
            image_url: None,
        }
    }

    #[test]
    fn test_category_all_matches_everything() {
        assert_eq!(CategoryFilter::from_key("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_key(""), CategoryFilter::All);
        assert!(CategoryFilter::All.matches(&product("shoes", 100)));
    }

    #[test]
    fn test_category_exact_match() {
        let filter = CategoryFilter::from_key("shoes");
        assert!(filter.matches(&product("shoes", 100)));
        assert!(!filter.matches(&product("hats", 100)));
        // Exact match, not substring.
        assert!(!filter.matches(&product("shoes-kids", 100)));
    }

    #[test]
    fn test_price_range_inclusive_bounds() {
        let range = PriceRange::from_bounds(&[10.0, 30.0], Currency::USD);
        assert!(range.contains(&product("a", 1000)));
        assert!(range.contains(&product("a", 3000)));
        assert!(range.contains(&product("a", 2000)));
        assert!(!range.contains(&product("a", 999)));
        assert!(!range.contains(&product("a", 3001)));
    }

    #[test]
    fn test_price_range_fails_open_on_wrong_arity() {
        assert!(PriceRange::from_bounds(&[], Currency::USD).is_unbounded());
        assert!(PriceRange::from_bounds(&[10.0], Currency::USD).is_unbounded());
        assert!(PriceRange::from_bounds(&[1.0, 2.0, 3.0], Currency::USD).is_unbounded());
    }

    #[test]
    fn test_price_range_fails_open_on_bad_numbers() {
        assert!(PriceRange::from_bounds(&[f64::NAN, 10.0], Currency::USD).is_unbounded());
        assert!(PriceRange::from_bounds(&[0.0, f64::INFINITY], Currency::USD).is_unbounded());
        assert!(PriceRange::from_bounds(&[30.0, 10.0], Currency::USD).is_unbounded());
    }

    #[test]
    fn test_price_range_new_inverted_falls_open() {
        let range = PriceRange::new(
            Some(Money::new(3000, Currency::USD)),
            Some(Money::new(1000, Currency::USD)),
        );
        assert!(range.is_unbounded());
    }

    #[test]
    fn test_unbounded_matches_missing_price() {
        let mut p = product("a", 0);
        p.price = None;
        assert!(PriceRange::unbounded().contains(&p));
        // Missing price is treated as zero, so a positive minimum excludes it.
        let range = PriceRange::from_bounds(&[1.0, 10.0], Currency::USD);
        assert!(!range.contains(&p));
    }
}
