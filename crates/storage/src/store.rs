use async_trait::async_trait;

use crate::Result;

/// Fixed key under which the serialized cart is persisted.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Core trait for key-value persistence backends.
///
/// Values are opaque strings; the cart is mirrored as serialized JSON under
/// [`CART_STORAGE_KEY`]. All implementations must be thread-safe
/// (Send + Sync).
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Returns the value stored under `key`, or None if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
