use serde::{Deserialize, Serialize};

use super::product::CartItem;

/// The main data container: an ordered sequence of cart items, keyed by
/// product id. Id uniqueness within the sequence is an invariant upheld
/// by `CartService`; insertion order is preserved across mutations.
///
/// `#[serde(transparent)]` keeps the persisted form a plain JSON array
/// of flat item objects, matching the payload the browser storefront
/// stores under its local-storage key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an item with the given product id is in the cart.
    #[must_use]
    pub fn contains(&self, product_id: u64) -> bool {
        self.items.iter().any(|item| item.id() == product_id)
    }

    /// Get the item for a product id, if present.
    #[must_use]
    pub fn get(&self, product_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    /// Get a mutable handle to the item for a product id, if present.
    pub fn get_mut(&mut self, product_id: u64) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id() == product_id)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities (the number shown on a cart badge).
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Sum of all line totals in the display currency.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}
