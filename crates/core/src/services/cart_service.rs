use crate::errors::CartError;
use crate::models::cart::Cart;
use crate::models::product::{CartItem, Product};
use crate::models::stock::StockRecord;

/// Cart mutation and stock-validation logic.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
/// The one stock gate here (`validate_stock`) serves both the add and
/// the update path, so the two can never disagree on what "in stock"
/// means.
pub struct CartService;

impl CartService {
    pub fn new() -> Self {
        Self
    }

    /// Check that `requested` units of a product fit within the
    /// available stock. `requested` is the full candidate quantity
    /// (current + 1 for an increment, the target amount for an update,
    /// 1 for a first add), not the delta.
    pub fn validate_stock(
        &self,
        stock: &StockRecord,
        product_id: u64,
        requested: u32,
    ) -> Result<(), CartError> {
        if requested > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }
        Ok(())
    }

    /// Append a freshly fetched product with quantity 1.
    /// If the id is somehow already present, increments instead of
    /// appending a duplicate — product ids stay unique in the cart.
    pub fn add_item(&self, cart: &mut Cart, product: Product) {
        if let Some(item) = cart.get_mut(product.id) {
            item.amount += 1;
        } else {
            cart.items.push(CartItem::new(product));
        }
    }

    /// Increment an existing item's quantity by exactly 1.
    /// Returns the new quantity.
    pub fn increment(&self, cart: &mut Cart, product_id: u64) -> Result<u32, CartError> {
        let item = cart
            .get_mut(product_id)
            .ok_or(CartError::ProductNotInCart(product_id))?;
        item.amount += 1;
        Ok(item.amount)
    }

    /// Remove an item by product id, returning it.
    /// All other entries keep their order and quantities.
    pub fn remove_item(&self, cart: &mut Cart, product_id: u64) -> Result<CartItem, CartError> {
        let idx = cart
            .items
            .iter()
            .position(|item| item.id() == product_id)
            .ok_or(CartError::ProductNotInCart(product_id))?;
        Ok(cart.items.remove(idx))
    }

    /// Set an item's quantity to exactly `amount`. Non-matching entries
    /// pass through unchanged; an absent id is not an error here (the
    /// cart is simply left as-is). Returns whether an entry matched.
    pub fn set_amount(&self, cart: &mut Cart, product_id: u64, amount: u32) -> bool {
        match cart.get_mut(product_id) {
            Some(item) => {
                item.amount = amount;
                true
            }
            None => false,
        }
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
