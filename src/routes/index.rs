use axum::{Router, routing::get, Json};
use serde_json::{json, Value};

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
}

/// Service banner listing the public endpoints
async fn index() -> Json<Value> {
    Json(json!({
        "message": "ShopAssist Commerce Agent API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/chat": "POST - Handle conversation and text-based product recommendations",
            "/image-search": "POST - Handle image-based product search",
            "/products": "GET - Get all available products",
            "/products/search": "GET - Rank products against a text query",
            "/products/{id}": "GET - Get a single product",
            "/health": "GET - Health check"
        }
    }))
}
