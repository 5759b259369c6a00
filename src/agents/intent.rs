//! Intent Classification
//!
//! Decides whether a message asks for products or is small talk. Product
//! keywords win over conversational ones, and anything unrecognised is
//! treated as conversation.

/// What the user is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Greetings, questions about the assistant, anything ambiguous
    Conversation,
    /// A request to find or recommend products
    ProductRequest,
}

const PRODUCT_KEYWORDS: &[&str] = &[
    "recommend", "suggest", "find", "search", "show", "looking for",
    "need", "want", "buy", "price", "product", "item", "give me",
    "t-shirt", "shirt", "shoes", "shorts", "watch",
    "mat", "gloves", "bottle", "earbuds",
];

const CONVERSATION_KEYWORDS: &[&str] = &[
    "what's your name", "who are you", "what can you do", "hello", "hi", "hey",
    "how are you", "what is your purpose", "help me", "capabilities",
];

/// Classify a message. Matching is plain substring search on the lowercased
/// text, so "hi" also fires inside longer words.
pub fn classify_intent(message: &str) -> Intent {
    let message_lower = message.to_lowercase();

    if PRODUCT_KEYWORDS.iter().any(|kw| message_lower.contains(kw)) {
        return Intent::ProductRequest;
    }

    if CONVERSATION_KEYWORDS.iter().any(|kw| message_lower.contains(kw)) {
        return Intent::Conversation;
    }

    Intent::Conversation
}
