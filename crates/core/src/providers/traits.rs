use async_trait::async_trait;

use crate::errors::CartError;
use crate::models::product::Product;
use crate::models::stock::StockRecord;

/// Trait abstraction over the remote storefront catalog.
///
/// The cart only ever reads from the catalog (product details and stock
/// levels). Swapping the backing API — or substituting a mock in tests —
/// touches only the implementation, never the cart logic.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CatalogProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch display fields for a product.
    async fn fetch_product(&self, product_id: u64) -> Result<Product, CartError>;

    /// Fetch the current stock level for a product.
    async fn fetch_stock(&self, product_id: u64) -> Result<StockRecord, CartError>;
}
