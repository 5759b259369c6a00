//! Agent System
//!
//! The commerce agent answers every chat message and image upload:
//!
//! - **Intent**: decides between small talk and a product request
//! - **Conversation**: canned replies about the assistant
//! - **Recommendation**: keyword search over the catalog
//! - **Image search**: placeholder matcher for uploaded pictures
//!
//! ## Pipeline Overview
//!
//! ```text
//! User Message
//!      │
//!      ▼
//! ┌─────────────┐
//! │   Intent    │
//! └─────────────┘
//!      │
//!      ├── Conversation ──▶ canned reply
//!      │
//!      └── ProductRequest ─▶ catalog ─▶ text ranking ─▶ top matches
//! ```

pub mod conversation;
pub mod image_search;
pub mod intent;
pub mod recommendation;

pub use intent::{classify_intent, Intent};

use std::sync::Arc;

use crate::config::AgentConfig;
use crate::db::CatalogStore;
use crate::models::{AgentResponse, ImageUpload};
use tracing::info;

/// Shopping assistant handling conversation, text recommendations and image search
pub struct CommerceAgent {
    settings: AgentConfig,
    catalog: Arc<dyn CatalogStore>,
}

impl CommerceAgent {
    pub fn new(settings: AgentConfig, catalog: Arc<dyn CatalogStore>) -> Self {
        Self { settings, catalog }
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    /// Route a text message to a canned reply or a product search.
    ///
    /// `history` is accepted for API compatibility and not interpreted.
    pub async fn handle_message(
        &self,
        message: &str,
        history: &[serde_json::Value],
    ) -> AgentResponse {
        let message_lower = message.trim().to_lowercase();
        let intent = classify_intent(&message_lower);
        info!(
            intent = ?intent,
            message_len = message.len(),
            history_len = history.len(),
            "Handling message"
        );

        match intent {
            Intent::Conversation => conversation::reply(&message_lower, &self.settings),
            Intent::ProductRequest => {
                recommendation::recommend(message, self.catalog.as_ref(), &self.settings).await
            }
        }
    }

    pub async fn handle_image_search(
        &self,
        upload: &ImageUpload,
        history: &[serde_json::Value],
    ) -> AgentResponse {
        info!(
            content_type = %upload.content_type,
            size = upload.data.len(),
            history_len = history.len(),
            "Handling image search"
        );

        image_search::search_by_image(upload, self.catalog.as_ref(), &self.settings).await
    }
}
