//! Image-based product search over the fixed catalog.

use tracing::{info, warn};

use crate::config::AgentConfig;
use crate::db::CatalogStore;
use crate::models::{AgentResponse, ImageUpload, ResponseType};
use crate::search::{search_products_by_image_similarity, ImageQuery};

pub const MATCH_RESPONSE: &str = "I found some products from our catalog that might match your image:";
pub const NO_MATCH_RESPONSE: &str = "I've received your image. Here are some products from our catalog:";

/// Products shown when the matcher returns nothing
const FALLBACK_COUNT: usize = 3;

pub async fn search_by_image(
    upload: &ImageUpload,
    catalog: &dyn CatalogStore,
    agent: &AgentConfig,
) -> AgentResponse {
    let all_products = match catalog.all_products().await {
        Ok(products) => products,
        Err(e) => {
            warn!(error = %e, "Catalog unavailable for image search");
            return AgentResponse {
                response: format!("I encountered an error processing the image: {}", e.detail()),
                products: None,
                response_type: ResponseType::ImageSearch,
            };
        }
    };

    let query = ImageQuery::from_upload(upload);
    let matched =
        search_products_by_image_similarity(&query, &all_products, agent.image_match_count);
    info!(
        filename = upload.filename.as_deref().unwrap_or("<unnamed>"),
        format = %query.format,
        size = upload.data.len(),
        matched = matched.len(),
        "Image search complete"
    );

    let (response, mut products) = if matched.is_empty() {
        let fallback: Vec<_> = all_products.into_iter().take(FALLBACK_COUNT).collect();
        (NO_MATCH_RESPONSE, fallback)
    } else {
        (MATCH_RESPONSE, matched)
    };
    products.truncate(agent.max_products);

    AgentResponse {
        response: response.to_string(),
        products: Some(products),
        response_type: ResponseType::ImageSearch,
    }
}
