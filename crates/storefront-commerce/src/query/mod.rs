//! Catalog query module.
//!
//! Filters, sorting, and pagination over an in-memory catalog snapshot.

mod filter;
mod query;
mod results;

pub use filter::{CategoryFilter, PriceRange};
pub use query::{CatalogQuery, SortOrder};
pub use results::{CatalogPage, Pagination};
