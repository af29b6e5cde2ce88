//! Key-value persistence for the storefront.
//!
//! The storefront's durable state (the cart and the appearance
//! preferences) lives in a string key-value store supplied by the host
//! (browser local storage in the original deployment). This crate defines
//! that port, a typed JSON layer on top of it, and the preference types
//! with their documented defaults.
//!
//! Reads always fail open: missing or corrupt state loads as the default,
//! never as an error.
//!
//! # Example
//!
//! ```
//! use storefront_store::prelude::*;
//!
//! let mut store = MemoryStore::new();
//!
//! let mut prefs = Preferences::load(&store).unwrap();
//! assert_eq!(prefs.theme, Theme::Light);
//!
//! prefs.theme = prefs.theme.toggled();
//! prefs.save(&mut store).unwrap();
//! assert_eq!(Preferences::load(&store).unwrap().theme, Theme::Dark);
//! ```

mod error;
mod kv;
pub mod persist;
mod prefs;

pub use error::StoreError;
pub use kv::{KeyValue, MemoryStore};
pub use persist::{clear_cart, load_cart, save_cart, CART_KEY, PREFS_KEY};
pub use prefs::{FontSize, Preferences, Theme};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::persist::{clear_cart, load_cart, save_cart};
    pub use crate::{FontSize, KeyValue, MemoryStore, Preferences, StoreError, Theme};
}
