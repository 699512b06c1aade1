pub mod errors;
pub mod models;
pub mod notify;
pub mod providers;
pub mod services;
pub mod storage;

use std::sync::Arc;

use models::cart::Cart;
use models::notification::Notification;
use models::product::CartItem;
use notify::{NotificationSink, NullSink};
use providers::traits::CatalogProvider;
use services::cart_service::CartService;
use storage::backend::CartStorage;
use storage::manager::StorageManager;

use errors::CartError;

/// Main entry point for the shopcart core library.
/// Holds the authoritative in-memory cart and the services needed to
/// mutate it against remote stock levels.
///
/// This is an explicit state-holder: pass it (or a handle to it) to
/// whichever UI components need the cart, instead of reaching for an
/// ambient singleton. Mutations go through `&mut self`, so a single
/// holder cannot interleave two operations and lose an update.
///
/// Every committed mutation overwrites the persisted cart, so reloading
/// from the same storage always reproduces the in-memory state. On
/// failure nothing is committed — in-memory and persisted carts never
/// diverge.
#[must_use]
pub struct ShoppingCart {
    cart: Cart,
    cart_service: CartService,
    provider: Arc<dyn CatalogProvider>,
    storage: Arc<dyn CartStorage>,
    sink: Arc<dyn NotificationSink>,
}

impl std::fmt::Debug for ShoppingCart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShoppingCart")
            .field("items", &self.cart.len())
            .field("total_items", &self.cart.total_items())
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl ShoppingCart {
    /// Open a cart over the given catalog and storage, discarding
    /// notifications. The persisted cart (if any) becomes the initial
    /// state; missing or unparseable data degrades to an empty cart.
    pub fn open(provider: Arc<dyn CatalogProvider>, storage: Arc<dyn CartStorage>) -> Self {
        Self::open_with_sink(provider, storage, Arc::new(NullSink))
    }

    /// Open a cart that forwards user-facing notifications to `sink`.
    pub fn open_with_sink(
        provider: Arc<dyn CatalogProvider>,
        storage: Arc<dyn CartStorage>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let cart = match StorageManager::load_cart(storage.as_ref()) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "stored cart unreadable, starting empty");
                Cart::new()
            }
        };

        Self {
            cart,
            cart_service: CartService::new(),
            provider,
            storage,
            sink,
        }
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Add one unit of a product to the cart.
    ///
    /// A product already in the cart gets its quantity incremented by
    /// exactly 1; a new product is fetched from the catalog and appended
    /// with quantity 1. Both paths pass the same stock gate first, so an
    /// out-of-stock product is never committed in either form.
    ///
    /// On failure, fires one notification (`OutOfStock` for the stock
    /// gate, `AddFailed` for everything else) and returns the typed
    /// error; the cart and its persisted copy are left untouched.
    pub async fn add_product(&mut self, product_id: u64) -> Result<(), CartError> {
        match self.try_add(product_id).await {
            Ok(amount) => {
                tracing::debug!(product_id, amount, "product added to cart");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(product_id, error = %e, "add_product failed");
                self.sink.notify(if e.is_out_of_stock() {
                    Notification::OutOfStock
                } else {
                    Notification::AddFailed
                });
                Err(e)
            }
        }
    }

    /// Remove a product from the cart entirely.
    ///
    /// Removing an id that is not in the cart is an error: fires one
    /// `RemoveFailed` notification and leaves state unchanged.
    pub fn remove_product(&mut self, product_id: u64) -> Result<(), CartError> {
        match self.try_remove(product_id) {
            Ok(()) => {
                tracing::debug!(product_id, "product removed from cart");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(product_id, error = %e, "remove_product failed");
                self.sink.notify(Notification::RemoveFailed);
                Err(e)
            }
        }
    }

    /// Set a product's quantity to exactly `amount`.
    ///
    /// `amount == 0` is a silent no-op: no error, no notification, no
    /// persistence. An amount above the available stock is rejected with
    /// one `OutOfStock` notification. An id not in the cart passes
    /// through — the cart is persisted unchanged and the call succeeds
    /// (only `remove_product` treats an absent id as an error).
    pub async fn update_product_amount(
        &mut self,
        product_id: u64,
        amount: u32,
    ) -> Result<(), CartError> {
        if amount == 0 {
            return Ok(());
        }

        match self.try_update(product_id, amount).await {
            Ok(()) => {
                tracing::debug!(product_id, amount, "cart quantity updated");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(product_id, amount, error = %e, "update_product_amount failed");
                self.sink.notify(if e.is_out_of_stock() {
                    Notification::OutOfStock
                } else {
                    Notification::UpdateFailed
                });
                Err(e)
            }
        }
    }

    /// Empty the cart and persist the empty state (e.g., after an order
    /// has been submitted).
    pub fn clear(&mut self) -> Result<(), CartError> {
        let empty = Cart::new();
        StorageManager::save_cart(self.storage.as_ref(), &empty)?;
        self.cart = empty;
        Ok(())
    }

    // ── Read Access ─────────────────────────────────────────────────

    /// The current cart items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.cart.items
    }

    /// Whether a product is in the cart.
    #[must_use]
    pub fn contains(&self, product_id: u64) -> bool {
        self.cart.contains(product_id)
    }

    /// Quantity of a product in the cart, or `None` if absent.
    #[must_use]
    pub fn amount_of(&self, product_id: u64) -> Option<u32> {
        self.cart.get(product_id).map(|item| item.amount)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of all quantities (cart badge count).
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.cart.total_items()
    }

    /// Sum of all line totals in the display currency.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.cart.total_price()
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Commit a working copy: persist it, then swap it in. Storage
    /// failure leaves the previous state intact on both sides.
    fn commit(&mut self, updated: Cart) -> Result<(), CartError> {
        StorageManager::save_cart(self.storage.as_ref(), &updated)?;
        self.cart = updated;
        Ok(())
    }

    async fn try_add(&mut self, product_id: u64) -> Result<u32, CartError> {
        let stock = self.provider.fetch_stock(product_id).await?;
        let mut updated = self.cart.clone();

        let amount = if updated.contains(product_id) {
            let current = updated.get(product_id).map_or(0, |item| item.amount);
            self.cart_service
                .validate_stock(&stock, product_id, current + 1)?;
            self.cart_service.increment(&mut updated, product_id)?
        } else {
            self.cart_service.validate_stock(&stock, product_id, 1)?;
            let product = self.provider.fetch_product(product_id).await?;
            self.cart_service.add_item(&mut updated, product);
            1
        };

        self.commit(updated)?;
        Ok(amount)
    }

    fn try_remove(&mut self, product_id: u64) -> Result<(), CartError> {
        let mut updated = self.cart.clone();
        self.cart_service.remove_item(&mut updated, product_id)?;
        self.commit(updated)
    }

    async fn try_update(&mut self, product_id: u64, amount: u32) -> Result<(), CartError> {
        let stock = self.provider.fetch_stock(product_id).await?;
        self.cart_service.validate_stock(&stock, product_id, amount)?;

        let mut updated = self.cart.clone();
        self.cart_service.set_amount(&mut updated, product_id, amount);
        self.commit(updated)
    }
}
