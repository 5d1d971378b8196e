//! Stock service trait and implementations.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::ProductId;
use domain::StockLevel;

use crate::error::{CartStoreError, Result};

/// Trait for querying per-product available quantity.
#[async_trait]
pub trait StockService: Send + Sync {
    /// Returns the current stock level for a product.
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel>;
}

/// Stock service backed by the store HTTP API.
///
/// Queries `GET {base_url}/stock/{product_id}`.
#[derive(Debug, Clone)]
pub struct HttpStockService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStockService {
    /// Creates a new HTTP stock service.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl StockService for HttpStockService {
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel> {
        let url = format!("{}/stock/{}", self.base_url, product_id);
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
struct InMemoryStockState {
    levels: HashMap<ProductId, i64>,
    fail_requests: bool,
}

/// In-memory stock service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStockService {
    state: Arc<RwLock<InMemoryStockState>>,
}

impl InMemoryStockService {
    /// Creates a new in-memory stock service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the available quantity for a product.
    pub fn set_stock(&self, product_id: impl Into<ProductId>, amount: i64) {
        self.state
            .write()
            .unwrap()
            .levels
            .insert(product_id.into(), amount);
    }

    /// Configures the service to fail every request.
    pub fn set_fail_requests(&self, fail: bool) {
        self.state.write().unwrap().fail_requests = fail;
    }
}

#[async_trait]
impl StockService for InMemoryStockService {
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel> {
        let state = self.state.read().unwrap();

        if state.fail_requests {
            return Err(CartStoreError::UnexpectedStatus { status: 500 });
        }

        state
            .levels
            .get(&product_id)
            .map(|&amount| StockLevel {
                id: product_id,
                amount,
            })
            .ok_or(CartStoreError::ProductNotFound { product_id })
    }
}
