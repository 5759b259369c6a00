use std::sync::Arc;

use sqlx::SqlitePool;
use crate::agents::CommerceAgent;
use crate::config::Config;
use crate::types::AppError;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub agent: Arc<CommerceAgent>,
}

// Catalog models
// Note: FromRow is needed for runtime query_as (no DATABASE_URL at compile time)

/// A catalog entry as returned to clients
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    pub features: Vec<String>,
    #[serde(default, with = "sqlite_timestamp")]
    pub created_at: Option<chrono::NaiveDateTime>,
}

/// `created_at` travels in SQLite's `CURRENT_TIMESTAMP` text form
mod sqlite_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
            })
            .transpose()
    }
}

/// Raw `products` row; `features` is a JSON array stored as text
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    pub features: Option<String>,
    pub created_at: Option<chrono::NaiveDateTime>,
}

impl TryFrom<ProductRow> for Product {
    type Error = AppError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let features = match row.features.as_deref() {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw)?,
            _ => Vec::new(),
        };

        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            price: row.price,
            image_url: row.image_url,
            features,
            created_at: row.created_at,
        })
    }
}

/// Seed entry, before the database assigns an id
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    pub features: Vec<String>,
}

// API Request/Response types

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Conversation,
    TextRecommendation,
    ImageSearch,
}

#[derive(Debug, serde::Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Accepted for client compatibility; never stored or interpreted.
    /// Missing and `null` both read as no history.
    #[serde(default)]
    pub conversation_history: Option<Vec<serde_json::Value>>,
}

/// Response format shared by `/chat` and `/image-search`
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AgentResponse {
    pub response: String,
    pub products: Option<Vec<Product>>,
    pub response_type: ResponseType,
}

/// An uploaded image, as received from the multipart form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: Option<String>,
    pub content_type: String,
    pub data: bytes::Bytes,
}

#[derive(Debug, serde::Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub count: usize,
}

#[derive(Debug, serde::Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, serde::Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<crate::search::ScoredProduct>,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub database: String,
}
