// Shared fixtures for unit tests

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::agents::CommerceAgent;
use crate::config::{AgentConfig, Config, DatabaseConfig, ServerConfig};
use crate::db::{self, CatalogStore, SqliteCatalog};
use crate::models::{AppState, Product};
use crate::types::{AppError, AppResult};

/// The seed catalog as it reads back from a fresh database
pub fn sample_catalog() -> Vec<Product> {
    db::seed::sample_products()
        .into_iter()
        .enumerate()
        .map(|(i, p)| Product {
            id: i as i64 + 1,
            name: p.name,
            description: p.description,
            category: p.category,
            price: p.price,
            image_url: p.image_url,
            features: p.features,
            created_at: None,
        })
        .collect()
}

pub struct StaticCatalog(pub Vec<Product>);

#[async_trait]
impl CatalogStore for StaticCatalog {
    async fn all_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.0.clone())
    }
}

pub struct FailingCatalog;

#[async_trait]
impl CatalogStore for FailingCatalog {
    async fn all_products(&self) -> AppResult<Vec<Product>> {
        Err(AppError::Internal("catalog offline".to_string()))
    }
}

pub fn database_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    }
}

pub async fn memory_pool() -> SqlitePool {
    db::create_pool(&database_config()).await.unwrap()
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = memory_pool().await;
    db::init_database(&pool).await.unwrap();
    pool
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
            max_upload_bytes: 1024 * 1024,
        },
        database: database_config(),
        agent: AgentConfig::default(),
    }
}

pub fn state_with_pool(pool: SqlitePool) -> AppState {
    let config = test_config();
    let agent = CommerceAgent::new(
        config.agent.clone(),
        Arc::new(SqliteCatalog::new(pool.clone())),
    );

    AppState {
        pool,
        config,
        agent: Arc::new(agent),
    }
}

pub async fn seeded_state() -> AppState {
    state_with_pool(seeded_pool().await)
}
