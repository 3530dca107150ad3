//! Route table for the product API.
//!
//! # Responsibilities
//! - Register the five product routes
//! - Extract `{id}` as a raw string segment (handlers parse it)
//! - Answer unknown paths and wrong methods with JSON errors
//!
//! # Design Decisions
//! - Strict trailing-slash matching, no redirects: `/products/` is the list
//!   route and `/products` is unknown
//! - Immutable after construction (thread-safe without locks)
//! - No request body size cap: bodies are buffered whole, whatever their size

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::http::handlers::{
    create_product, delete_product, get_product, list_products, method_not_allowed,
    route_not_found, update_product,
};
use crate::http::server::AppState;

/// Path of the create route.
pub const PRODUCT_PATH: &str = "/product";
/// Path of the list route.
pub const PRODUCTS_PATH: &str = "/products/";
/// Path of the single-product routes.
pub const PRODUCT_ID_PATH: &str = "/product/{id}";

/// Build the product router bound to the given state.
pub fn product_router(state: AppState) -> Router {
    Router::new()
        .route(PRODUCT_PATH, post(create_product).fallback(method_not_allowed))
        .route(PRODUCTS_PATH, get(list_products).fallback(method_not_allowed))
        .route(
            PRODUCT_ID_PATH,
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
