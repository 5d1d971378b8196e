//! Domain layer for the cart system.
//!
//! This crate provides the core cart model:
//! - Value objects for cart lines, catalog entries, and stock levels
//! - The `Cart` ordered container with pure state transforms
//! - Command structs describing the three cart operations

pub mod cart;

pub use cart::{
    AddProduct, Cart, CartItem, CatalogProduct, RemoveProduct, StockLevel, UpdateProductAmount,
};
