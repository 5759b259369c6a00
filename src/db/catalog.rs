use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::db::DatabaseOperations;
use crate::models::Product;
use crate::types::AppResult;

/// Source of the product catalog the agent searches over
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn all_products(&self) -> AppResult<Vec<Product>>;
}

/// Catalog backed by the SQLite `products` table
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    async fn all_products(&self) -> AppResult<Vec<Product>> {
        DatabaseOperations::get_all_products(&self.pool).await
    }
}
