// ShopAssist - chat assistant backend for a demo storefront

pub mod config;
pub mod db;
pub mod models;
pub mod types;
pub mod agents;
pub mod search;    // Keyword ranking and the image search placeholder
pub mod routes;
pub mod middleware;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
