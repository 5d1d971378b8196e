//! Cart store error types.

use common::ProductId;
use storage::StorageError;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Each kind is distinguishable by callers: out-of-stock rejections,
/// unknown products, upstream transport failures, and persistence failures
/// are separate variants rather than a single catch-all.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// The requested quantity exceeds the available stock.
    #[error(
        "requested quantity out of stock for product {product_id}: requested {requested}, available {available}"
    )]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// The product is unknown to the upstream service.
    #[error("product not found: {product_id}")]
    ProductNotFound { product_id: ProductId },

    /// An upstream request failed at the transport level.
    #[error("service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An upstream service answered with an unexpected status.
    #[error("unexpected service response: status {status}")]
    UnexpectedStatus { status: u16 },

    /// The persistence store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be serialized for persistence.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cart store operations.
pub type Result<T> = std::result::Result<T, CartStoreError>;
