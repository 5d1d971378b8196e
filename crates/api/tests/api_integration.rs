//! Integration tests for the API server.

use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use cart::{InMemoryCatalogService, InMemoryStockService};
use common::ProductId;
use domain::CatalogProduct;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

async fn setup() -> (axum::Router, InMemoryStockService, InMemoryCatalogService) {
    let (state, stock, catalog) = api::create_in_memory_state().await;
    let app = api::create_app(state, get_metrics_handle());
    (app, stock, catalog)
}

async fn setup_with_sneaker(stock_amount: i64) -> axum::Router {
    let (app, stock, catalog) = setup().await;
    catalog.insert_product(CatalogProduct {
        id: ProductId::new(1),
        title: "Sneaker".to_string(),
        price: 139.9,
        image: "sneaker.jpg".to_string(),
    });
    stock.set_stock(1, stock_amount);
    app
}

fn add_request(product_id: i64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/cart/items")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "product_id": product_id }).to_string(),
        ))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _, _) = setup().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_empty_cart() {
    let (app, _, _) = setup().await;

    let response = app
        .oneshot(Request::builder().uri("/cart").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
    assert_eq!(json["total_quantity"], 0);
}

#[tokio::test]
async fn test_add_product() {
    let app = setup_with_sneaker(5).await;

    let response = app.oneshot(add_request(1)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["items"][0]["id"], 1);
    assert_eq!(json["items"][0]["title"], "Sneaker");
    assert_eq!(json["items"][0]["amount"], 1);
    assert_eq!(json["total_quantity"], 1);
}

#[tokio::test]
async fn test_add_same_product_twice_increments() {
    let app = setup_with_sneaker(5).await;

    app.clone().oneshot(add_request(1)).await.unwrap();
    let response = app.oneshot(add_request(1)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["amount"], 2);
}

#[tokio::test]
async fn test_add_out_of_stock_is_conflict() {
    let app = setup_with_sneaker(1).await;

    app.clone().oneshot(add_request(1)).await.unwrap();
    let response = app.clone().oneshot(add_request(1)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("out of stock")
    );

    // Cart unchanged.
    let response = app
        .oneshot(Request::builder().uri("/cart").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["items"][0]["amount"], 1);
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let (app, stock, _) = setup().await;
    stock.set_stock(9, 5);

    let response = app.oneshot(add_request(9)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failing_stock_service_is_bad_gateway() {
    let (app, stock, catalog) = setup().await;
    catalog.insert_product(CatalogProduct {
        id: ProductId::new(1),
        title: "Sneaker".to_string(),
        price: 139.9,
        image: "sneaker.jpg".to_string(),
    });
    stock.set_stock(1, 5);
    stock.set_fail_requests(true);

    let response = app.oneshot(add_request(1)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_update_amount() {
    let app = setup_with_sneaker(5).await;
    app.clone().oneshot(add_request(1)).await.unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/cart/items/1")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::json!({ "amount": 4 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["items"][0]["amount"], 4);
}

#[tokio::test]
async fn test_update_amount_zero_is_accepted() {
    let app = setup_with_sneaker(5).await;
    app.clone().oneshot(add_request(1)).await.unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/cart/items/1")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::json!({ "amount": 0 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["items"][0]["amount"], 0);
}

#[tokio::test]
async fn test_update_above_stock_is_conflict() {
    let app = setup_with_sneaker(3).await;
    app.clone().oneshot(add_request(1)).await.unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/cart/items/1")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::json!({ "amount": 4 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_remove_product() {
    let app = setup_with_sneaker(5).await;
    app.clone().oneshot(add_request(1)).await.unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cart/items/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_remove_absent_product_still_succeeds() {
    let (app, _, _) = setup().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cart/items/9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_endpoint_renders() {
    let (app, _, _) = setup().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
