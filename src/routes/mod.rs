//! API Routes
//!
//! This module organizes all HTTP endpoints for the service:
//! - `/` - Service banner and endpoint list
//! - `/health` - Health check
//! - `/products` - Catalog listing, lookup and scored search
//! - `/chat` - Conversation and text-based recommendations
//! - `/image-search` - Image upload search

pub mod chat;
pub mod health;
pub mod image_search;
pub mod index;
pub mod products;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::middleware::apply_cors;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");
    let allowed_origins = state.config.server.cors_allowed_origins.clone();

    let router = Router::new()
        .merge(index::router())
        .merge(health::router(state.clone()))
        .merge(products::router(state.clone()))
        .merge(chat::router(state.clone()))
        .merge(image_search::router(state));

    apply_cors(router, &allowed_origins).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seeded_pool, seeded_state, state_with_pool};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BOUNDARY: &str = "X-SHOPASSIST-BOUNDARY";

    async fn app() -> Router {
        create_router(seeded_state().await)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri("/image-search")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_lists_endpoints() {
        let (status, body) = send(app().await, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "ShopAssist Commerce Agent API");
        assert!(body["endpoints"]["/chat"].as_str().unwrap().starts_with("POST"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app().await, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_list_products() {
        let (status, body) = send(app().await, get("/products")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 8);
        assert_eq!(body["products"][6]["name"], "Wireless Bluetooth Earbuds");
        assert_eq!(body["products"][6]["features"][2], "8-hour battery");
    }

    #[tokio::test]
    async fn test_get_product() {
        let (status, body) = send(app().await, get("/products/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Professional Training Shoes");

        let (status, body) = send(app().await, get("/products/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Not found: Product 99 not found");
    }

    #[tokio::test]
    async fn test_search_products() {
        let (status, body) = send(app().await, get("/products/search?q=breathable&limit=2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query"], "breathable");
        assert_eq!(body["count"], 2);
        assert_eq!(body["results"][0]["score"], 3);
        assert_eq!(body["results"][0]["product"]["name"], "Nike Pro Sport T-Shirt");
    }

    #[tokio::test]
    async fn test_chat_recommendation() {
        let request = post_json(
            "/chat",
            json!({
                "message": "I need some shoes",
                "conversation_history": [{"role": "user", "content": "hi"}]
            }),
        );
        let (status, body) = send(app().await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response_type"], "text_recommendation");
        assert_eq!(body["response"], "Here are some products that match your request:");
        assert_eq!(body["products"][0]["name"], "Professional Training Shoes");
    }

    #[tokio::test]
    async fn test_chat_conversation() {
        let (status, body) = send(app().await, post_json("/chat", json!({"message": "who are you"}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response_type"], "conversation");
        assert_eq!(body["products"], Value::Null);
    }

    #[tokio::test]
    async fn test_chat_accepts_null_history() {
        let request = post_json(
            "/chat",
            json!({"message": "hello", "conversation_history": null}),
        );
        let (status, body) = send(app().await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "Hello! I'm ShopAssist. How can I help you today?");
    }

    #[tokio::test]
    async fn test_products_carry_sqlite_timestamps() {
        let (_, body) = send(app().await, get("/products/1")).await;
        let created_at = body["created_at"].as_str().unwrap();

        assert!(chrono::NaiveDateTime::parse_from_str(created_at, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[tokio::test]
    async fn test_image_search() {
        let request = multipart("image", "look.png", "image/png", b"\x89PNG\r\n\x1a\n");
        let (status, body) = send(app().await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response_type"], "image_search");
        assert_eq!(
            body["response"],
            "I found some products from our catalog that might match your image:"
        );
        assert_eq!(body["products"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_image_search_requires_image_field() {
        let request = multipart("photo", "look.png", "image/png", b"png");
        let (status, body) = send(app().await, request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("image"));
    }

    #[tokio::test]
    async fn test_image_search_rejects_oversized_upload() {
        let mut state = state_with_pool(seeded_pool().await);
        state.config.server.max_upload_bytes = 1024;

        let request = multipart("image", "big.png", "image/png", &[0u8; 4096]);
        let (status, body) = send(create_router(state), request).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body["detail"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app().await.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
