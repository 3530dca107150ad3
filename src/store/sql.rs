//! SQL implementation of [`ProductStore`].

use async_trait::async_trait;
use sqlx::AnyPool;

use crate::store::{Product, ProductPayload, ProductStore, StoreError};

/// Data accessor over a shared, thread-safe connection pool.
#[derive(Debug, Clone)]
pub struct SqlProductStore {
    pool: AnyPool,
}

impl SqlProductStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for SqlProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, StoreError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, payload: ProductPayload) -> Result<Product, StoreError> {
        let result = sqlx::query("INSERT INTO products (name, quantity, price) VALUES (?, ?, ?)")
            .bind(&payload.name)
            .bind(payload.quantity)
            .bind(payload.price)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_id().ok_or(StoreError::MissingInsertId)?;
        tracing::debug!(id, name = %payload.name, "Product inserted");
        Ok(payload.with_id(id))
    }

    async fn update(&self, id: i64, payload: ProductPayload) -> Result<Product, StoreError> {
        let result = sqlx::query("UPDATE products SET name = ?, quantity = ?, price = ? WHERE id = ?")
            .bind(&payload.name)
            .bind(payload.quantity)
            .bind(payload.price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "Update matched no product");
        }
        Ok(payload.with_id(id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "Delete matched no product");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, DbDriver};
    use crate::store::{connect, schema};

    async fn fresh_store() -> SqlProductStore {
        let pool = connect(&DatabaseConfig::sqlite_in_memory()).await.unwrap();
        schema::create_table(&pool, DbDriver::Sqlite).await.unwrap();
        SqlProductStore::new(pool)
    }

    fn payload(name: &str, quantity: i64, price: f64) -> ProductPayload {
        ProductPayload {
            name: name.into(),
            quantity,
            price,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = fresh_store().await;
        let first = store.create(payload("jam", 5, 400.89)).await.unwrap();
        let second = store.create(payload("tea", 1, 2.5)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let store = fresh_store().await;
        let created = store.create(payload("jam", 5, 400.89)).await.unwrap();
        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = fresh_store().await;
        let err = store.get_by_id(42).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = fresh_store().await;
        assert!(store.list().await.unwrap().is_empty());

        store.create(payload("a", 1, 1.0)).await.unwrap();
        store.create(payload("b", 2, 2.0)).await.unwrap();
        let names: Vec<_> = store.list().await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let store = fresh_store().await;
        let created = store.create(payload("discord", 150, 900.0)).await.unwrap();
        let updated = store
            .update(created.id, payload("discord", 500, 900.0))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(store.get_by_id(created.id).await.unwrap().quantity, 500);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows_succeed() {
        let store = fresh_store().await;
        let updated = store.update(7, payload("ghost", 1, 1.0)).await.unwrap();
        assert_eq!(updated.id, 7);
        store.delete(7).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let store = fresh_store().await;
        let created = store.create(payload("cia", 100, 20.0)).await.unwrap();
        store.delete(created.id).await.unwrap();
        assert!(matches!(
            store.get_by_id(created.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_table_is_storage_error() {
        let pool = connect(&DatabaseConfig::sqlite_in_memory()).await.unwrap();
        let store = SqlProductStore::new(pool);
        assert!(matches!(store.list().await, Err(StoreError::Storage(_))));
    }
}
