use sqlx::SqlitePool;
use crate::models::*;
use crate::types::AppResult;

const PRODUCT_COLUMNS: &str =
    "id, name, description, category, price, image_url, features, created_at";

pub struct DatabaseOperations;

impl DatabaseOperations {
    // Catalog reads

    pub async fn get_all_products(pool: &SqlitePool) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id ASC"
        ))
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    pub async fn get_product(pool: &SqlitePool, product_id: i64) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(product_id)
        .fetch_optional(pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    pub async fn count_products(pool: &SqlitePool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    // Seeding

    /// Insert one product; pass a transaction to batch several
    pub async fn insert_product<'e, E>(executor: E, product: &NewProduct) -> AppResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let features = serde_json::to_string(&product.features)?;

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, category, price, image_url, features)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(features)
        .execute(executor)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
