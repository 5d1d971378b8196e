//! Cart store for the shopping-cart system.
//!
//! The [`CartStore`] holds the in-memory cart, validates mutations against
//! the remote stock service, mirrors every accepted state into the
//! persistence store, and reports user-facing outcomes through a
//! [`Notifier`]. External collaborators are injected through the service
//! and storage traits, with in-memory implementations for testing.

pub mod error;
pub mod notifier;
pub mod services;
pub mod store;

pub use error::{CartStoreError, Result};
pub use notifier::{Notification, Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use services::{
    CatalogService, HttpCatalogService, HttpStockService, InMemoryCatalogService,
    InMemoryStockService, StockService,
};
pub use store::CartStore;
