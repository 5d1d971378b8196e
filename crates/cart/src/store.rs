//! The cart store.
//!
//! Holds the in-memory cart, validates mutations against the stock
//! service, and mirrors every accepted state into the persistence store.
//! Each operation computes the next cart once and applies that single
//! value to both the persistence store and memory, so the two can never
//! disagree about an accepted mutation. Persistence happens first: a
//! failed write leaves the visible cart untouched.

use common::ProductId;
use domain::{AddProduct, Cart, RemoveProduct, UpdateProductAmount};
use storage::{CART_STORAGE_KEY, CartStorage};
use tokio::sync::Mutex;

use crate::error::{CartStoreError, Result};
use crate::notifier::Notifier;
use crate::services::{CatalogService, StockService};

const MSG_OUT_OF_STOCK: &str = "requested quantity out of stock";
const MSG_ADD_FAILED: &str = "error adding product";
const MSG_REMOVED: &str = "product removed from cart";
const MSG_REMOVE_FAILED: &str = "error removing product";
const MSG_UPDATE_FAILED: &str = "error updating product";

/// State container for the shopping cart.
///
/// Collaborators are injected at construction; the store owns the cart for
/// its whole lifetime and is the only writer. Operations hold the state
/// lock for their full duration, so concurrent mutations are serialized
/// rather than racing on a stale snapshot.
pub struct CartStore<S, C, P, N> {
    stock: S,
    catalog: C,
    storage: P,
    notifier: N,
    state: Mutex<Cart>,
}

impl<S, C, P, N> CartStore<S, C, P, N>
where
    S: StockService,
    C: CatalogService,
    P: CartStorage,
    N: Notifier,
{
    /// Creates a store, rehydrating the cart from the persistence store.
    ///
    /// An absent value starts an empty cart. Unreadable content also starts
    /// empty, after logging what was found.
    pub async fn load(stock: S, catalog: C, storage: P, notifier: N) -> Result<Self> {
        let cart = match storage.get(CART_STORAGE_KEY).await? {
            Some(raw) => match Cart::from_json(&raw) {
                Ok(cart) => cart,
                Err(err) => {
                    tracing::warn!(error = %err, "stored cart is unreadable, starting empty");
                    Cart::new()
                }
            },
            None => Cart::new(),
        };

        tracing::debug!(lines = cart.len(), "cart store initialized");

        Ok(Self {
            stock,
            catalog,
            storage,
            notifier,
            state: Mutex::new(cart),
        })
    }

    /// Returns a snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.state.lock().await.clone()
    }

    /// Adds one unit of a product to the cart.
    ///
    /// A product already in the cart has its amount incremented by one,
    /// subject to the stock check; a new product is fetched from the
    /// catalog and enters with amount 1. Returns the resulting cart.
    #[tracing::instrument(skip(self))]
    pub async fn add_product(&self, cmd: AddProduct) -> Result<Cart> {
        metrics::counter!("cart_add_product_total").increment(1);

        let result = self.apply_add(cmd.product_id).await;
        match &result {
            Ok((_, title)) => self.notifier.info(&format!("{title} added to cart")),
            Err(CartStoreError::OutOfStock { .. }) => {
                metrics::counter!("cart_out_of_stock_total").increment(1);
                self.notifier.error(MSG_OUT_OF_STOCK);
            }
            Err(err) => {
                tracing::error!(error = %err, "add product failed");
                self.notifier.error(MSG_ADD_FAILED);
            }
        }

        result.map(|(cart, _)| cart)
    }

    /// Removes a product's line from the cart.
    ///
    /// Filter semantics: removing an absent product succeeds and still
    /// emits the removal notification. Returns the resulting cart.
    #[tracing::instrument(skip(self))]
    pub async fn remove_product(&self, cmd: RemoveProduct) -> Result<Cart> {
        metrics::counter!("cart_remove_product_total").increment(1);

        let result = self.apply_remove(cmd.product_id).await;
        match &result {
            Ok(_) => self.notifier.info(MSG_REMOVED),
            Err(err) => {
                tracing::error!(error = %err, "remove product failed");
                self.notifier.error(MSG_REMOVE_FAILED);
            }
        }

        result
    }

    /// Sets the quantity of a product already in the cart.
    ///
    /// Rejects amounts above the available stock; otherwise the requested
    /// amount is applied verbatim, with no lower bound. An absent product
    /// id leaves the cart unchanged. Returns the resulting cart.
    #[tracing::instrument(skip(self))]
    pub async fn update_product_amount(&self, cmd: UpdateProductAmount) -> Result<Cart> {
        metrics::counter!("cart_update_amount_total").increment(1);

        let result = self.apply_update(cmd.product_id, cmd.amount).await;
        match &result {
            Ok(_) => {}
            Err(CartStoreError::OutOfStock { .. }) => {
                metrics::counter!("cart_out_of_stock_total").increment(1);
                self.notifier.error(MSG_OUT_OF_STOCK);
            }
            Err(err) => {
                tracing::error!(error = %err, "update product amount failed");
                self.notifier.error(MSG_UPDATE_FAILED);
            }
        }

        result
    }

    async fn apply_add(&self, product_id: ProductId) -> Result<(Cart, String)> {
        let mut state = self.state.lock().await;
        let stock = self.stock.stock_level(product_id).await?;

        let (next, title) = match state.get(product_id) {
            Some(existing) => {
                let requested = existing.amount + 1;
                if requested > stock.amount {
                    return Err(CartStoreError::OutOfStock {
                        product_id,
                        requested,
                        available: stock.amount,
                    });
                }
                (
                    state.with_amount(product_id, requested),
                    existing.title.clone(),
                )
            }
            None => {
                let item = self.catalog.product(product_id).await?.into_item();
                let title = item.title.clone();
                (state.with_item(item), title)
            }
        };

        self.persist(&next).await?;
        *state = next.clone();
        Ok((next, title))
    }

    async fn apply_remove(&self, product_id: ProductId) -> Result<Cart> {
        let mut state = self.state.lock().await;
        let next = state.without(product_id);

        self.persist(&next).await?;
        *state = next.clone();
        Ok(next)
    }

    async fn apply_update(&self, product_id: ProductId, amount: i64) -> Result<Cart> {
        let mut state = self.state.lock().await;
        let stock = self.stock.stock_level(product_id).await?;

        if amount > stock.amount {
            return Err(CartStoreError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let next = state.with_amount(product_id, amount);
        self.persist(&next).await?;
        *state = next.clone();
        Ok(next)
    }

    async fn persist(&self, cart: &Cart) -> Result<()> {
        let serialized = cart.to_json()?;
        self.storage.set(CART_STORAGE_KEY, &serialized).await?;
        Ok(())
    }
}
