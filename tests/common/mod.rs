//! Shared utilities for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use product_service::config::{DatabaseConfig, DbDriver};
use product_service::http::HttpServer;
use product_service::store::{self, schema};
use product_service::{Product, ProductPayload, ProductStore, SqlProductStore, StoreError};

/// A store over a fresh in-memory database with an empty `products` table.
pub async fn sqlite_store() -> Arc<SqlProductStore> {
    let pool = store::connect(&DatabaseConfig::sqlite_in_memory())
        .await
        .expect("open in-memory database");
    schema::create_table(&pool, DbDriver::Sqlite)
        .await
        .expect("create products table");
    Arc::new(SqlProductStore::new(pool))
}

/// Insert a row directly, bypassing the HTTP layer.
pub async fn add_product(store: &SqlProductStore, name: &str, quantity: i64, price: f64) {
    sqlx::query("INSERT INTO products (name, quantity, price) VALUES (?, ?, ?)")
        .bind(name)
        .bind(quantity)
        .bind(price)
        .execute(store.pool())
        .await
        .expect("insert product");
}

/// The fully layered application router.
pub fn app(store: Arc<dyn ProductStore>) -> Router {
    HttpServer::new(store).router()
}

/// Response parts the tests inspect.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Drive one request through the router in-process.
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Assert the response is JSON with the expected status.
pub fn check_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status: {}, Received: {} (body: {})",
        expected, response.status, response.body
    );
    assert_eq!(response.headers["content-type"], "application/json");
}

/// A store whose every operation fails, counting how often it was called.
#[derive(Default)]
pub struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Storage(sqlx::Error::PoolClosed))
    }
}

#[async_trait]
impl ProductStore for FailingStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.fail()
    }

    async fn get_by_id(&self, _id: i64) -> Result<Product, StoreError> {
        self.fail()
    }

    async fn create(&self, _payload: ProductPayload) -> Result<Product, StoreError> {
        self.fail()
    }

    async fn update(&self, _id: i64, _payload: ProductPayload) -> Result<Product, StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<(), StoreError> {
        self.fail()
    }
}
