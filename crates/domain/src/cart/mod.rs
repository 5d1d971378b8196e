//! Cart container and related types.

mod commands;
mod state;
mod value_objects;

pub use commands::{AddProduct, RemoveProduct, UpdateProductAmount};
pub use state::Cart;
pub use value_objects::{CartItem, CatalogProduct, StockLevel};
