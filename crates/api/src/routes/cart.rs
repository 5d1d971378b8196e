//! Cart endpoints exposing the consumer contract over REST.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use cart::{CartStore, CatalogService, Notifier, StockService};
use domain::{AddProduct, Cart, RemoveProduct, UpdateProductAmount};
use serde::{Deserialize, Serialize};
use storage::CartStorage;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: StockService, C: CatalogService, P: CartStorage, N: Notifier> {
    pub cart: CartStore<S, C, P, N>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct AddItemRequest {
    pub product_id: i64,
}

#[derive(Deserialize)]
pub struct UpdateItemRequest {
    pub amount: i64,
}

// -- Response types --

#[derive(Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub total_quantity: i64,
    pub subtotal: f64,
}

#[derive(Serialize)]
pub struct CartItemResponse {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: i64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
            items: cart
                .items()
                .iter()
                .map(|item| CartItemResponse {
                    id: item.id.value(),
                    title: item.title.clone(),
                    price: item.price,
                    image: item.image.clone(),
                    amount: item.amount,
                })
                .collect(),
        }
    }
}

// -- Handlers --

/// GET /cart — returns the current cart.
pub async fn show<S, C, P, N>(State(state): State<Arc<AppState<S, C, P, N>>>) -> Json<CartResponse>
where
    S: StockService + 'static,
    C: CatalogService + 'static,
    P: CartStorage + 'static,
    N: Notifier + 'static,
{
    Json(CartResponse::from(state.cart.cart().await))
}

/// POST /cart/items — adds one unit of a product to the cart.
#[tracing::instrument(skip(state, req))]
pub async fn add<S, C, P, N>(
    State(state): State<Arc<AppState<S, C, P, N>>>,
    Json(req): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<CartResponse>), ApiError>
where
    S: StockService + 'static,
    C: CatalogService + 'static,
    P: CartStorage + 'static,
    N: Notifier + 'static,
{
    let cart = state
        .cart
        .add_product(AddProduct::new(req.product_id))
        .await?;
    Ok((StatusCode::CREATED, Json(cart.into())))
}

/// PUT /cart/items/:id — sets the quantity of a cart line.
#[tracing::instrument(skip(state, req))]
pub async fn update<S, C, P, N>(
    State(state): State<Arc<AppState<S, C, P, N>>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<CartResponse>, ApiError>
where
    S: StockService + 'static,
    C: CatalogService + 'static,
    P: CartStorage + 'static,
    N: Notifier + 'static,
{
    let cart = state
        .cart
        .update_product_amount(UpdateProductAmount::new(id, req.amount))
        .await?;
    Ok(Json(cart.into()))
}

/// DELETE /cart/items/:id — removes a product's line from the cart.
#[tracing::instrument(skip(state))]
pub async fn remove<S, C, P, N>(
    State(state): State<Arc<AppState<S, C, P, N>>>,
    Path(id): Path<i64>,
) -> Result<Json<CartResponse>, ApiError>
where
    S: StockService + 'static,
    C: CatalogService + 'static,
    P: CartStorage + 'static,
    N: Notifier + 'static,
{
    let cart = state.cart.remove_product(RemoveProduct::new(id)).await?;
    Ok(Json(cart.into()))
}
