use crate::errors::CartError;
use crate::models::cart::Cart;

use super::backend::CartStorage;

/// Namespaced key under which the serialized cart lives. Fixed so every
/// session of the same storefront finds the same cart.
pub const CART_STORAGE_KEY: &str = "@shopcart:cart";

/// High-level storage operations: serialize/deserialize the cart and
/// move it in and out of a key-value backend.
pub struct StorageManager;

impl StorageManager {
    /// Serialize the cart to JSON and overwrite the stored value.
    ///
    /// Flow: Cart → serde_json → `CART_STORAGE_KEY`
    pub fn save_cart(storage: &dyn CartStorage, cart: &Cart) -> Result<(), CartError> {
        let json = serde_json::to_string(cart)
            .map_err(|e| CartError::Serialization(format!("Failed to serialize cart: {e}")))?;
        storage.save(CART_STORAGE_KEY, &json)
    }

    /// Load and deserialize the persisted cart.
    ///
    /// Returns `Ok(None)` when nothing is stored. A present but
    /// unparseable value is a `Deserialization` error — the caller
    /// decides whether to degrade to an empty cart.
    pub fn load_cart(storage: &dyn CartStorage) -> Result<Option<Cart>, CartError> {
        let Some(json) = storage.load(CART_STORAGE_KEY)? else {
            return Ok(None);
        };
        let cart: Cart = serde_json::from_str(&json)
            .map_err(|e| CartError::Deserialization(format!("Failed to parse stored cart: {e}")))?;
        Ok(Some(cart))
    }

    /// Delete the persisted cart entirely.
    pub fn clear_cart(storage: &dyn CartStorage) -> Result<(), CartError> {
        storage.remove(CART_STORAGE_KEY)
    }
}
