use axum::{
    Router,
    routing::post,
    Json,
    extract::State,
    response::Json as ResponseJson,
};
use crate::models::{AgentResponse, AppState, ChatRequest};
use uuid::Uuid;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(post_chat))
        .with_state(state)
}

/// Conversation and text-based product recommendations
pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> ResponseJson<AgentResponse> {
    let request_id = Uuid::new_v4();
    info!(%request_id, message = ?request.message, "Received chat request");

    let response = state
        .agent
        .handle_message(
            &request.message,
            request.conversation_history.as_deref().unwrap_or_default(),
        )
        .await;

    info!(
        %request_id,
        response_type = ?response.response_type,
        products = response.products.as_ref().map_or(0, Vec::len),
        "Chat response sent"
    );

    Json(response)
}
