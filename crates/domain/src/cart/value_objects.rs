//! Value objects for the cart domain.

use common::ProductId;
use serde::{Deserialize, Serialize};

/// A line item held in the cart.
///
/// Field names match the persisted JSON format and the catalog wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product identifier.
    pub id: ProductId,

    /// Human-readable product title.
    pub title: String,

    /// Unit price as reported by the catalog.
    pub price: f64,

    /// Product image URL.
    pub image: String,

    /// Quantity of this product in the cart.
    pub amount: i64,
}

impl CartItem {
    /// Creates a new cart line.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
            amount,
        }
    }

    /// Returns the total price for this line (unit price * amount).
    pub fn line_total(&self) -> f64 {
        self.price * self.amount as f64
    }
}

/// A product as returned by the catalog service.
///
/// Any quantity field present in the catalog payload is not part of this
/// shape; the cart assigns its own amount on first add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// The product identifier.
    pub id: ProductId,

    /// Human-readable product title.
    pub title: String,

    /// Unit price.
    pub price: f64,

    /// Product image URL.
    pub image: String,
}

impl CatalogProduct {
    /// Converts the catalog entry into a cart line with quantity 1.
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            price: self.price,
            image: self.image,
            amount: 1,
        }
    }
}

/// Available quantity for a product, as reported by the stock service.
///
/// Queried at operation time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    /// The product identifier.
    pub id: ProductId,

    /// Units currently available.
    pub amount: i64,
}
