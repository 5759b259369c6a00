use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::config::DatabaseConfig;
use crate::types::AppResult;
use anyhow::Result;
use tracing::info;

pub use catalog::*;
pub use operations::*;

pub mod catalog;
pub mod operations;
pub mod seed;

pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    // Test connection
    sqlx::query("SELECT 1")
        .fetch_one(&pool)
        .await?;

    Ok(pool)
}

pub async fn health_check(pool: &SqlitePool) -> Result<bool> {
    sqlx::query("SELECT 1")
        .fetch_one(pool)
        .await?;

    Ok(true)
}

/// Create the `products` table and seed it when empty
pub async fn init_database(pool: &SqlitePool) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    let existing = DatabaseOperations::count_products(pool).await?;
    if existing == 0 {
        let products = seed::sample_products();
        // One commit: a failed seed leaves the table empty for the next start
        let mut tx = pool.begin().await?;
        for product in &products {
            DatabaseOperations::insert_product(&mut *tx, product).await?;
        }
        tx.commit().await?;
        info!(count = products.len(), "Seeded product catalog");
    } else {
        info!(count = existing, "Product catalog already present");
    }

    Ok(())
}
