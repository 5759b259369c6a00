use axum::{
    Router,
    routing::get,
    Json,
    extract::{Path, Query, State},
};
use crate::db::DatabaseOperations;
use crate::models::{AppState, Product, ProductsResponse, SearchParams, SearchResponse};
use crate::search::rank_products;
use crate::types::{AppError, AppResult};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/search", get(search_products))
        .route("/products/{id}", get(get_product))
        .with_state(state)
}

/// GET /products - the whole catalog
async fn list_products(State(state): State<AppState>) -> AppResult<Json<ProductsResponse>> {
    let products = DatabaseOperations::get_all_products(&state.pool).await?;

    Ok(Json(ProductsResponse {
        count: products.len(),
        products,
    }))
}

/// GET /products/{id}
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    DatabaseOperations::get_product(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
}

/// GET /products/search?q=...&limit=... - scored keyword search
async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let products = DatabaseOperations::get_all_products(&state.pool).await?;

    let mut results = rank_products(&params.q, &products);
    if let Some(limit) = params.limit {
        results.truncate(limit);
    }
    info!(query = %params.q, results = results.len(), "Catalog search");

    Ok(Json(SearchResponse {
        query: params.q,
        count: results.len(),
        results,
    }))
}
