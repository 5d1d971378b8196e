//! Cart commands.

use common::ProductId;

/// Command to add one unit of a product to the cart.
#[derive(Debug, Clone, Copy)]
pub struct AddProduct {
    /// The product to add.
    pub product_id: ProductId,
}

impl AddProduct {
    /// Creates a new AddProduct command.
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

/// Command to remove a product's line from the cart.
#[derive(Debug, Clone, Copy)]
pub struct RemoveProduct {
    /// The product to remove.
    pub product_id: ProductId,
}

impl RemoveProduct {
    /// Creates a new RemoveProduct command.
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

/// Command to set the quantity of a product already in the cart.
#[derive(Debug, Clone, Copy)]
pub struct UpdateProductAmount {
    /// The product whose line is updated.
    pub product_id: ProductId,

    /// The requested quantity, applied verbatim when stock allows.
    pub amount: i64,
}

impl UpdateProductAmount {
    /// Creates a new UpdateProductAmount command.
    pub fn new(product_id: impl Into<ProductId>, amount: i64) -> Self {
        Self {
            product_id: product_id.into(),
            amount,
        }
    }
}
