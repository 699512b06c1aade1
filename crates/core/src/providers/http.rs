use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::CatalogProvider;
use crate::errors::CartError;
use crate::models::product::Product;
use crate::models::stock::StockRecord;

/// HTTP catalog provider for a JSON storefront API.
///
/// - **Endpoints**: `GET {base}/products/{id}`, `GET {base}/stock/{id}`
/// - **Auth**: none — the catalog is public and read-only.
/// - Unknown product ids come back as HTTP 404 and surface as
///   `CartError::ProductNotFound`.
///
/// No retry or backoff: a failed call fails the whole operation and the
/// caller decides whether to try again.
pub struct HttpCatalogProvider {
    client: Client,
    base_url: String,
}

impl HttpCatalogProvider {
    /// Create a provider against the given API base URL
    /// (e.g., `http://localhost:3333`). A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        product_id: u64,
    ) -> Result<T, CartError> {
        let url = format!("{}/{path}/{product_id}", self.base_url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CartError::ProductNotFound(product_id));
        }
        if !status.is_success() {
            return Err(CartError::Api {
                status: status.as_u16(),
                message: format!("GET /{path}/{product_id} failed"),
            });
        }

        resp.json().await.map_err(|e| CartError::Api {
            status: status.as_u16(),
            message: format!("Failed to parse /{path}/{product_id} response: {e}"),
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogProvider for HttpCatalogProvider {
    fn name(&self) -> &str {
        "HttpCatalog"
    }

    async fn fetch_product(&self, product_id: u64) -> Result<Product, CartError> {
        self.get_json("products", product_id).await
    }

    async fn fetch_stock(&self, product_id: u64) -> Result<StockRecord, CartError> {
        self.get_json("stock", product_id).await
    }
}
