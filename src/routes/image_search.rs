use axum::{
    Router,
    routing::post,
    Json,
    http::StatusCode,
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
};
use crate::models::{AgentResponse, AppState, ImageUpload};
use crate::types::{AppError, AppResult};
use tracing::info;

/// Multipart field carrying the picture
const IMAGE_FIELD: &str = "image";

pub fn router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_bytes;

    Router::new()
        .route("/image-search", post(image_search))
        .layer(DefaultBodyLimit::max(max_upload))
        .with_state(state)
}

async fn image_search(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<AgentResponse>> {
    let upload = read_image(multipart).await?;
    info!(
        filename = upload.filename.as_deref().unwrap_or("<unnamed>"),
        content_type = %upload.content_type,
        size = upload.data.len(),
        "Image upload received"
    );

    let response = state.agent.handle_image_search(&upload, &[]).await;
    Ok(Json(response))
}

/// Oversized bodies are 413; anything else is a malformed form
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::InvalidRequest(err.body_text())
    }
}

/// Pull the `image` field out of the form; other fields are ignored
async fn read_image(mut multipart: Multipart) -> AppResult<ImageUpload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field
            .content_type()
            .map(str::to_string)
            .or_else(|| {
                filename
                    .as_deref()
                    .and_then(|name| mime_guess::from_path(name).first())
                    .map(|m| m.to_string())
            })
            .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());
        let data = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        return Ok(ImageUpload {
            filename,
            content_type,
            data,
        });
    }

    Err(AppError::InvalidRequest(format!(
        "Missing multipart field `{}`",
        IMAGE_FIELD
    )))
}
