//! Reference DDL for the `products` table.
//!
//! The service does not migrate schemas. These statements exist for test
//! harnesses and for throwaway in-memory databases.

use sqlx::AnyPool;

use crate::config::DbDriver;
use crate::store::StoreError;

const MYSQL_PRODUCTS: &str = "CREATE TABLE IF NOT EXISTS products (
    id INT NOT NULL AUTO_INCREMENT,
    name VARCHAR(255) NOT NULL,
    quantity INT NOT NULL,
    price DOUBLE NOT NULL,
    PRIMARY KEY (id)
)";

const SQLITE_PRODUCTS: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    price REAL NOT NULL
)";

/// DDL for the given driver.
pub fn create_table_sql(driver: DbDriver) -> &'static str {
    match driver {
        DbDriver::Mysql => MYSQL_PRODUCTS,
        DbDriver::Sqlite => SQLITE_PRODUCTS,
    }
}

/// Create the `products` table if it does not exist.
pub async fn create_table(pool: &AnyPool, driver: DbDriver) -> Result<(), StoreError> {
    sqlx::query(create_table_sql(driver)).execute(pool).await?;
    Ok(())
}
