//! Product Service Library
//!
//! A small JSON-over-HTTP CRUD service for a single `products` table.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod store;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Product, ProductPayload, ProductStore, SqlProductStore, StoreError};
