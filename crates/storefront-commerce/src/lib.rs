//! Storefront domain types and logic.
//!
//! This crate provides the core of a client-rendered storefront:
//!
//! - **Catalog**: product records as supplied by the remote API, with the
//!   unified stock/sale/discount predicates
//! - **Query**: the filter -> stable sort -> paginate pipeline that turns a
//!   catalog snapshot into one visible page
//! - **Cart**: line-item aggregation with add-time product snapshots and
//!   derived totals
//!
//! The crate does no I/O of its own: callers fetch the catalog snapshot and
//! hand it in, and consume the resulting pages and totals for rendering.
//!
//! # Example
//!
//! ```
//! use storefront_commerce::prelude::*;
//!
//! let products = vec![Product {
//!     id: ProductId::new("p1"),
//!     name: "Canvas Tote".to_string(),
//!     description: None,
//!     category: "bags".to_string(),
//!     price: Some(Money::new(1999, Currency::USD)),
//!     original_price: None,
//!     stock: 4,
//!     rating: 4.5,
//!     image_url: None,
//! }];
//!
//! let page = CatalogQuery::new()
//!     .with_search("tote")
//!     .with_sort(SortOrder::PriceLowHigh)
//!     .execute(&products);
//! assert_eq!(page.pagination.total, 1);
//!
//! let mut cart = Cart::new(Currency::USD);
//! cart.add(&page.items[0], 2).unwrap();
//! assert_eq!(cart.subtotal().unwrap().amount_cents, 3998);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod query;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{parse_products, Product};

    // Query
    pub use crate::query::{CatalogPage, CatalogQuery, CategoryFilter, Pagination, PriceRange, SortOrder};

    // Cart
    pub use crate::cart::{Cart, CartTotals, LineItem, ProductSnapshot, MAX_QUANTITY_PER_ITEM};
}
