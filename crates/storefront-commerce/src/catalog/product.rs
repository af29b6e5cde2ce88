//! Product records and the predicates derived from them.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product record as supplied by the catalog API.
///
/// The storefront treats records as opaque beyond the named fields. `id` is
/// unique within a catalog snapshot; `price` may be absent, in which case the
/// product sorts and filters as if it cost nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name (searchable).
    pub name: String,
    /// Full description (searchable).
    #[serde(default)]
    pub description: Option<String>,
    /// Category name (searchable, filterable by exact match).
    pub category: String,
    /// Current price. Absent prices sort as zero.
    #[serde(default)]
    pub price: Option<Money>,
    /// Pre-discount price, when the product is on sale.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Average review rating in [0, 5].
    #[serde(default)]
    pub rating: f64,
    /// Primary image URL (carried into cart snapshots).
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Check if the product has units available.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if the product is on sale.
    ///
    /// On sale means an original price is present and strictly greater than
    /// the effective price. This is the single definition used everywhere;
    /// callers must not derive their own variant.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| orig.amount_cents > self.sort_price())
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|orig| {
            let price = self.sort_price();
            if orig.amount_cents > price && orig.amount_cents > 0 {
                let savings = orig.amount_cents - price;
                Some((savings as f64 / orig.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Effective price in cents for sorting and range filters.
    ///
    /// A record with no price is treated as priced at zero.
    pub fn sort_price(&self) -> i64 {
        self.price.map(|p| p.amount_cents).unwrap_or(0)
    }

    /// Case-insensitive substring match against name, description, and category.
    ///
    /// `needle` must already be lowercased; an empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(needle))
                .unwrap_or(false)
            || self.category.to_lowercase().contains(needle)
    }
}

/// Parse a catalog snapshot from its JSON representation.
pub fn parse_products(json: &str) -> Result<Vec<Product>, CommerceError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: "Wool Beanie".to_string(),
            description: Some("A warm knit hat".to_string()),
            category: "accessories".to_string(),
            price: Some(Money::new(2000, Currency::USD)),
            original_price: None,
            stock: 5,
            rating: 4.2,
            image_url: None,
        }
    }

    #[test]
    fn test_in_stock() {
        let mut p = product("p1");
        assert!(p.is_in_stock());
        p.stock = 0;
        assert!(!p.is_in_stock());
    }

    #[test]
    fn test_on_sale_requires_higher_original() {
        let mut p = product("p1");
        assert!(!p.is_on_sale());

        p.original_price = Some(Money::new(3000, Currency::USD));
        assert!(p.is_on_sale());

        // Equal prices are not a sale.
        p.original_price = Some(Money::new(2000, Currency::USD));
        assert!(!p.is_on_sale());
    }

    #[test]
    fn test_discount_percentage() {
        let mut p = product("p1");
        p.original_price = Some(Money::new(3000, Currency::USD));

        let discount = p.discount_percentage().unwrap();
        assert!((discount - 33.33).abs() < 0.1);

        p.original_price = None;
        assert!(p.discount_percentage().is_none());
    }

    #[test]
    fn test_missing_price_sorts_as_zero() {
        let mut p = product("p1");
        p.price = None;
        assert_eq!(p.sort_price(), 0);

        // A present original price over a missing price counts as a sale.
        p.original_price = Some(Money::new(100, Currency::USD));
        assert!(p.is_on_sale());
    }

    #[test]
    fn test_search_matches_all_text_fields() {
        let p = product("p1");
        assert!(p.matches_search("beanie"));
        assert!(p.matches_search("knit"));
        assert!(p.matches_search("access"));
        assert!(!p.matches_search("sandal"));
        assert!(p.matches_search(""));
    }

    #[test]
    fn test_parse_products() {
        let json = r#"[
            {
                "id": "p1",
                "name": "Wool Beanie",
                "category": "accessories",
                "price": {"amount_cents": 2000, "currency": "USD"},
                "stock": 5,
                "rating": 4.2
            }
        ]"#;
        let products = parse_products(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "p1");
        assert_eq!(products[0].sort_price(), 2000);
        assert!(products[0].description.is_none());
    }

    #[test]
    fn test_parse_products_rejects_malformed_json() {
        assert!(parse_products("not json").is_err());
    }
}
