//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// Display fields of a product captured at the moment it was added.
///
/// The snapshot insulates the cart total from later price changes in the
/// live catalog: removing a sale price does not reprice items already
/// in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price at add-time.
    pub price: Money,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Stock level at add-time.
    pub stock: i64,
    /// Category name.
    pub category: String,
}

impl ProductSnapshot {
    /// Capture a product's display fields.
    ///
    /// A product with no price is captured at zero in the cart's currency.
    pub fn capture(product: &Product, currency: Currency) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.unwrap_or_else(|| Money::zero(currency)),
            image_url: product.image_url.clone(),
            stock: product.stock,
            category: product.category.clone(),
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Captured product fields.
    pub snapshot: ProductSnapshot,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl LineItem {
    /// The product this line refers to.
    pub fn product_id(&self) -> &ProductId {
        &self.snapshot.product_id
    }

    /// Line total (snapshot price * quantity), `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.snapshot.price.try_multiply(self.quantity)
    }
}

/// Derived cart totals, recomputed on demand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of snapshot price * quantity over all line items.
    pub subtotal: Money,
    /// Sum of quantities (not the number of distinct lines).
    pub item_count: i64,
    /// Number of distinct line items.
    pub unique_items: usize,
}

/// A shopping cart.
///
/// Holds at most one line item per product id; adding an already-present
/// product merges quantities. Totals are always derived from the line items,
/// never cached. Stock limits are not enforced here; rejecting an
/// out-of-stock add is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Cart currency; snapshots are expected to match it.
    pub currency: Currency,
    /// Unix timestamp of last mutation.
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
            updated_at: current_timestamp(),
        }
    }

    /// Add a product to the cart.
    ///
    /// Merges with an existing line item for the same product id, otherwise
    /// captures a fresh snapshot. Returns an error if the quantity is not
    /// positive, the merged quantity would exceed [`MAX_QUANTITY_PER_ITEM`],
    /// or the addition would overflow.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.snapshot.product_id == product.id)
        {
            let merged = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if merged > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    merged,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = merged;
            self.updated_at = current_timestamp();
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(LineItem {
            snapshot: ProductSnapshot::capture(product, self.currency),
            quantity,
        });
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Remove a line item by product id. Returns `false` if absent (not an error).
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id() != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Set the quantity of an existing line item.
    ///
    /// Quantities below 1 clamp to 1; removing a line requires an explicit
    /// [`Cart::remove`]. Returns `Ok(false)` when the product is not in the
    /// cart, and an error when the quantity exceeds the per-item limit.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        match self
            .items
            .iter_mut()
            .find(|i| i.snapshot.product_id == *product_id)
        {
            Some(item) => {
                item.quantity = quantity.max(1);
                self.updated_at = current_timestamp();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Merge another cart into this one (e.g., a persisted cart on load).
    ///
    /// Quantities that would exceed the per-item limit are capped.
    pub fn merge(&mut self, other: Cart) {
        for item in other.items {
            if let Some(existing) = self
                .items
                .iter_mut()
                .find(|i| i.snapshot.product_id == item.snapshot.product_id)
            {
                existing.quantity = existing
                    .quantity
                    .saturating_add(item.quantity)
                    .min(MAX_QUANTITY_PER_ITEM);
            } else {
                self.items.push(item);
            }
        }
        self.updated_at = current_timestamp();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by product id.
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    /// Sum of snapshot price * quantity over all line items.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.currency);
        for item in &self.items {
            let line = item.line_total().ok_or(CommerceError::Overflow)?;
            total = total
                .try_add(&line)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: line.currency.code().to_string(),
                })?;
        }
        Ok(total)
    }

    /// Calculate derived totals.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        Ok(CartTotals {
            subtotal: self.subtotal()?,
            item_count: self.item_count(),
            unique_items: self.unique_item_count(),
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
