//! Typed JSON persistence over the key-value port.
//!
//! Values are stored as JSON strings under fixed keys. Reads fail open:
//! a missing or corrupt value yields the documented default instead of an
//! error.

use crate::kv::KeyValue;
use crate::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use storefront_commerce::cart::Cart;

/// Fixed key for the persisted cart.
pub const CART_KEY: &str = "storefront:cart";
/// Fixed key for the persisted appearance preferences.
pub const PREFS_KEY: &str = "storefront:prefs";

/// Read and deserialize a JSON value.
///
/// Returns `Ok(None)` when the key is absent. A value that fails to parse is
/// logged and treated as absent rather than surfaced as an error.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValue + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding corrupt persisted value");
            Ok(None)
        }
    }
}

/// Serialize and write a JSON value.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
    S: KeyValue + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Load the persisted cart, falling back to an empty cart when the key is
/// missing or its value is corrupt.
pub fn load_cart<S: KeyValue + ?Sized>(store: &S) -> Result<Cart, StoreError> {
    let cart: Cart = load_json(store, CART_KEY)?.unwrap_or_default();
    tracing::debug!(items = cart.unique_item_count(), "cart loaded");
    Ok(cart)
}

/// Persist the cart under its fixed key.
pub fn save_cart<S: KeyValue + ?Sized>(store: &mut S, cart: &Cart) -> Result<(), StoreError> {
    save_json(store, CART_KEY, cart)?;
    tracing::debug!(items = cart.unique_item_count(), "cart saved");
    Ok(())
}

/// Drop the persisted cart.
pub fn clear_cart<S: KeyValue + ?Sized>(store: &mut S) -> Result<(), StoreError> {
    store.remove(CART_KEY)
}
