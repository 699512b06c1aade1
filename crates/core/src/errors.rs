use thiserror::Error;

/// Unified error type for the entire shopcart-core library.
/// Every fallible public function returns `Result<T, CartError>`.
///
/// Callers can tell business-rule rejections (`OutOfStock`,
/// `ProductNotInCart`) apart from transient failures (`Network`, `Api`)
/// instead of receiving one opaque failure per operation.
#[derive(Debug, Error)]
pub enum CartError {
    // ── Business Logic ──────────────────────────────────────────────
    #[error("Requested quantity for product {product_id} is out of stock ({requested} requested, {available} available)")]
    OutOfStock {
        product_id: u64,
        requested: u32,
        available: u32,
    },

    #[error("Product {0} is not in the cart")]
    ProductNotInCart(u64),

    // ── API / Network ───────────────────────────────────────────────
    #[error("Product not found in catalog: {0}")]
    ProductNotFound(u64),

    #[error("Catalog API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    // ── Storage ─────────────────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CartError {
    /// `true` for the stock-insufficient business rejection, which UIs
    /// usually surface differently from transient failures.
    #[must_use]
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CartError {
    fn from(e: std::io::Error) -> Self {
        CartError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CartError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // session tokens or keys appended by a caller never leak into logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CartError::Network(sanitized)
    }
}
