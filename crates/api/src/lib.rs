//! HTTP API server with observability for the cart system.
//!
//! Exposes the cart consumer contract over REST, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use cart::{
    CartStore, CatalogService, InMemoryCatalogService, InMemoryStockService, Notifier,
    StockService, TracingNotifier,
};
use metrics_exporter_prometheus::PrometheusHandle;
use storage::{CartStorage, InMemoryStorage};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::cart::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, C, P, N>(
    state: Arc<AppState<S, C, P, N>>,
    metrics_handle: PrometheusHandle,
) -> Router
where
    S: StockService + 'static,
    C: CatalogService + 'static,
    P: CartStorage + 'static,
    N: Notifier + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/cart", get(routes::cart::show::<S, C, P, N>))
        .route("/cart/items", post(routes::cart::add::<S, C, P, N>))
        .route(
            "/cart/items/{id}",
            put(routes::cart::update::<S, C, P, N>).delete(routes::cart::remove::<S, C, P, N>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Application state wired with in-memory collaborators.
pub type InMemoryAppState =
    AppState<InMemoryStockService, InMemoryCatalogService, InMemoryStorage, TracingNotifier>;

/// Creates application state backed by in-memory services.
///
/// Returns the service handles alongside the state so callers can seed
/// stock levels and catalog entries.
pub async fn create_in_memory_state() -> (
    Arc<InMemoryAppState>,
    InMemoryStockService,
    InMemoryCatalogService,
) {
    let stock = InMemoryStockService::new();
    let catalog = InMemoryCatalogService::new();

    let store = CartStore::load(
        stock.clone(),
        catalog.clone(),
        InMemoryStorage::new(),
        TracingNotifier,
    )
    .await
    .expect("in-memory storage reads cannot fail");

    (Arc::new(AppState { cart: store }), stock, catalog)
}
