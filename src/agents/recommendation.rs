//! Text-based product recommendations.

use tracing::{info, warn};

use crate::config::AgentConfig;
use crate::db::CatalogStore;
use crate::models::{AgentResponse, ResponseType};
use crate::search::search_products_by_text;

pub const MATCH_RESPONSE: &str = "Here are some products that match your request:";
pub const NO_MATCH_RESPONSE: &str =
    "I couldn't find exactly what you're looking for, but here are some popular items you might like:";

/// Search the catalog for `message`; falls back to popular items when
/// nothing scores. Catalog failures are reported in the reply text.
pub async fn recommend(
    message: &str,
    catalog: &dyn CatalogStore,
    agent: &AgentConfig,
) -> AgentResponse {
    let all_products = match catalog.all_products().await {
        Ok(products) => products,
        Err(e) => {
            warn!(error = %e, "Catalog unavailable for recommendation");
            return AgentResponse {
                response: format!("I encountered an error while searching: {}", e.detail()),
                products: None,
                response_type: ResponseType::TextRecommendation,
            };
        }
    };

    let matched = search_products_by_text(message, &all_products);
    info!(
        catalog_size = all_products.len(),
        matched = matched.len(),
        "Text search complete"
    );

    let (response, mut products) = if matched.is_empty() {
        let popular: Vec<_> = all_products
            .into_iter()
            .take(agent.fallback_count)
            .collect();
        (NO_MATCH_RESPONSE, popular)
    } else {
        (MATCH_RESPONSE, matched)
    };
    products.truncate(agent.max_products);

    AgentResponse {
        response: response.to_string(),
        products: Some(products),
        response_type: ResponseType::TextRecommendation,
    }
}
