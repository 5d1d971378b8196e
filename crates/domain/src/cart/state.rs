//! The cart container.

use common::ProductId;
use serde::{Deserialize, Serialize};

use super::CartItem;

/// Ordered collection of cart lines, unique by product id.
///
/// Insertion order is add order and is preserved across every transform.
/// Transforms compute the next cart as a single value, so callers can apply
/// the same value to every mirror of the state (memory, persistence)
/// without the two diverging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cart from existing lines.
    ///
    /// Callers are responsible for id uniqueness; lines rehydrated from the
    /// persistence store already satisfy it.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Returns the lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the line for a product, if present.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    /// Returns true if the cart holds a line for this product.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Returns the total price across all lines.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Returns a cart with `item` appended.
    pub fn with_item(&self, item: CartItem) -> Cart {
        let mut items = self.items.clone();
        items.push(item);
        Cart { items }
    }

    /// Returns a cart with the matching line's amount replaced.
    ///
    /// Map semantics: an absent product id leaves the cart unchanged.
    /// The amount is applied verbatim; callers enforce any bounds.
    pub fn with_amount(&self, product_id: ProductId, amount: i64) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .map(|item| {
                    if item.id == product_id {
                        CartItem {
                            amount,
                            ..item.clone()
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        }
    }

    /// Returns a cart without the matching line.
    ///
    /// Filter semantics: an absent product id leaves the cart unchanged.
    pub fn without(&self, product_id: ProductId) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .filter(|item| item.id != product_id)
                .cloned()
                .collect(),
        }
    }

    /// Serializes the cart to the persisted JSON array format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a cart from the persisted JSON array format.
    pub fn from_json(raw: &str) -> serde_json::Result<Cart> {
        serde_json::from_str(raw)
    }
}
