//! Product data access subsystem.
//!
//! # Data Flow
//! ```text
//! handler intent (list / get / create / update / delete)
//!     → ProductStore trait (object safe, shared as Arc<dyn ProductStore>)
//!     → sql.rs (one parameterized autocommit statement per call)
//!     → pool.rs (sqlx AnyPool: MySQL in production, SQLite locally)
//!     → Product rows mapped back via sqlx::FromRow
//! ```
//!
//! # Design Decisions
//! - The pool is injected, never global; each test owns a fresh database
//! - Update and delete do not check that the row exists
//! - No transactions: every operation is a single statement

pub mod pool;
pub mod product;
pub mod schema;
pub mod sql;

use async_trait::async_trait;
use thiserror::Error;

pub use pool::connect;
pub use product::{Product, ProductPayload};
pub use sql::SqlProductStore;

/// Errors raised by the data accessor.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row has the requested id.
    #[error("product {0} not found")]
    NotFound(i64),

    /// Any failure reported by the database driver.
    #[error(transparent)]
    Storage(#[from] sqlx::Error),

    /// The insert succeeded but the driver reported no generated id.
    #[error("database did not report an id for the inserted product")]
    MissingInsertId,
}

/// CRUD operations over the `products` table.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, ordered by id.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// The product with the given id, or [`StoreError::NotFound`].
    async fn get_by_id(&self, id: i64) -> Result<Product, StoreError>;

    /// Insert a product and return it with its assigned id.
    async fn create(&self, payload: ProductPayload) -> Result<Product, StoreError>;

    /// Overwrite the row with the given id and return the attempted values.
    ///
    /// Succeeds even when no row has that id.
    async fn update(&self, id: i64, payload: ProductPayload) -> Result<Product, StoreError>;

    /// Remove the row with the given id. Succeeds even when nothing matched.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
