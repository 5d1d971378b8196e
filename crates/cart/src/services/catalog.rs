//! Product catalog service trait and implementations.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::ProductId;
use domain::CatalogProduct;

use crate::error::{CartStoreError, Result};

/// Trait for querying full product details by id.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Returns the catalog entry for a product.
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct>;
}

/// Catalog service backed by the store HTTP API.
///
/// Queries `GET {base_url}/products/{product_id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogService {
    /// Creates a new HTTP catalog service.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct> {
        let url = format!("{}/products/{}", self.base_url, product_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(CartStoreError::ProductNotFound { product_id })
        } else {
            Err(CartStoreError::UnexpectedStatus {
                status: status.as_u16(),
            })
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    products: HashMap<ProductId, CatalogProduct>,
    fail_requests: bool,
}

/// In-memory catalog service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogService {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

impl InMemoryCatalogService {
    /// Creates a new in-memory catalog service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a catalog entry.
    pub fn insert_product(&self, product: CatalogProduct) {
        self.state
            .write()
            .unwrap()
            .products
            .insert(product.id, product);
    }

    /// Configures the service to fail every request.
    pub fn set_fail_requests(&self, fail: bool) {
        self.state.write().unwrap().fail_requests = fail;
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct> {
        let state = self.state.read().unwrap();

        if state.fail_requests {
            return Err(CartStoreError::UnexpectedStatus { status: 500 });
        }

        state
            .products
            .get(&product_id)
            .cloned()
            .ok_or(CartStoreError::ProductNotFound { product_id })
    }
}
