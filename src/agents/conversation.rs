//! Canned replies for small talk.

use crate::config::AgentConfig;
use crate::models::{AgentResponse, ResponseType};

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Pick a reply for a lowercased conversational message
pub fn reply(message: &str, agent: &AgentConfig) -> AgentResponse {
    let message_lower = message.to_lowercase();

    let response = if contains_any(&message_lower, &["name", "who are you"]) {
        format!(
            "Hi! I'm {}, your AI shopping assistant. {}",
            agent.name, agent.context
        )
    } else if contains_any(&message_lower, &["what can you do", "capabilities"]) {
        "I can help you with several things:\n\
         1. Answer general questions about the store\n\
         2. Recommend products based on text descriptions\n\
         3. Find products from images you upload\n\
         Just tell me what you're looking for or upload an image!"
            .to_string()
    } else if contains_any(&message_lower, &["hello", "hi", "hey"]) {
        format!("Hello! I'm {}. How can I help you today?", agent.name)
    } else if contains_any(&message_lower, &["help"]) {
        "I'm here to help you shop! You can:\n\
         • Ask me questions about products\n\
         • Describe what you're looking for (e.g., 'Recommend me a t-shirt for sports')\n\
         • Upload an image to find similar products\n\
         What would you like to do?"
            .to_string()
    } else {
        "I'm not sure how to help with that, but I can assist you with:\n\
         • Finding and recommending products\n\
         • Answering questions about our store\n\
         • Searching products by image\n\
         Try asking me to recommend a product or upload an image!"
            .to_string()
    };

    AgentResponse {
        response,
        products: None,
        response_type: ResponseType::Conversation,
    }
}
