//! Key-value persistence for the cart system.
//!
//! The cart keeps a serialized mirror of its state in a string-keyed store
//! that survives across sessions. This crate provides the storage trait,
//! an in-memory implementation for testing, and a file-backed
//! implementation for durable client-side state.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::{Result, StorageError};
pub use file::FileStorage;
pub use memory::InMemoryStorage;
pub use store::{CART_STORAGE_KEY, CartStorage};
