use axum::{Router, routing::get, Json, extract::State, response::Json as ResponseJson};
use crate::db;
use crate::models::{AppState, HealthResponse};
use tracing::warn;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> ResponseJson<HealthResponse> {
    let database = match db::health_check(&state.pool).await {
        Ok(_) => "connected",
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            "disconnected"
        }
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database: database.to_string(),
    };

    Json(response)
}
