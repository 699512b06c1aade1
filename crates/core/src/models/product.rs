use serde::{Deserialize, Serialize};

/// A catalog product as served by `GET /products/{id}`.
///
/// Remote-sourced and read-only from this library's perspective;
/// the cart never writes back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier, unique within the storefront
    pub id: u64,

    /// Display name shown in the cart UI
    pub title: String,

    /// Unit price in the storefront's display currency
    pub price: f64,

    /// URL of the product image
    pub image: String,
}

/// A product placed in the cart, carrying the quantity chosen so far.
///
/// The product fields are serde-flattened so the persisted form is a
/// flat object (`{"id": .., "title": .., ..., "amount": ..}`) — the same
/// shape browser storefronts keep in local storage, which keeps old
/// persisted carts loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    /// Quantity of this product in the cart (always >= 1)
    pub amount: u32,
}

impl CartItem {
    /// Wrap a freshly fetched product with the initial quantity of 1.
    pub fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    /// The catalog id of the wrapped product.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.product.id
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }
}
