use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub agent: AgentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// `*` allows any origin
    pub cors_allowed_origins: Vec<String>,
    /// Upper bound on an uploaded image body, in bytes
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub context: String,
    /// Products returned with a recommendation or image search
    pub max_products: usize,
    /// Catalog items suggested when a text search finds nothing
    pub fallback_count: usize,
    /// Catalog items returned by the image search stub
    pub image_match_count: usize,
}

pub const DEFAULT_AGENT_NAME: &str = "ShopAssist";
pub const DEFAULT_AGENT_CONTEXT: &str = "I'm an AI shopping assistant for an e-commerce website. I can help you find products, answer questions, and recommend items based on your needs.";

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.to_string(),
            context: DEFAULT_AGENT_CONTEXT.to_string(),
            max_products: 5,
            fallback_count: 3,
            image_match_count: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                    .parse()?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://commerce.db".to_string()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()?,
            },
            agent: AgentConfig {
                name: env::var("AGENT_NAME").unwrap_or_else(|_| DEFAULT_AGENT_NAME.to_string()),
                context: DEFAULT_AGENT_CONTEXT.to_string(),
                max_products: env::var("MAX_RECOMMENDATIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()?,
                fallback_count: env::var("FALLBACK_PRODUCTS")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()?,
                image_match_count: env::var("IMAGE_MATCHES")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()?,
            },
        })
    }
}
