use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One turn of a conversation. Immutable once created; the server never
/// persists history, it only echoes back what the client sends per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Normalized point-of-interest record, produced either by the live places
/// search or by the offline fixtures. Created fresh per search call and
/// discarded after the response is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Provider place id, or a stable `mock-*` id. Used to deduplicate the
    /// results of the authentic second search pass against the primary pass.
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub rating_count: u32,
    /// 0 (unknown/free) through 4 (most expensive).
    pub price_level: u8,
    /// Provider type list, e.g. `restaurant`, `lodging`, `museum`.
    pub category_tags: Vec<String>,
    /// Emoji badge derived from `category_tags` via a fixed priority order.
    pub category_badge: String,
    pub smart_tags: Vec<String>,
    /// Hero image, ~1200px wide.
    pub image_url: String,
    /// Same photo at ~400px, when the provider exposes photo references.
    pub thumbnail_url: Option<String>,
    pub map_url: String,
    /// Provider name -> search/booking URL. Only providers relevant to the
    /// record's category may appear here; `filter_search_urls` enforces this
    /// before a record leaves the provider.
    pub search_urls: BTreeMap<String, String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub open_now: Option<bool>,
    /// Up to two truncated review excerpts.
    pub reviews: Vec<String>,
    pub description: Option<String>,
}

/// Boolean tags derived from the current message text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentFlags {
    /// Small talk / general knowledge; suppresses place-card formatting.
    pub is_basic: bool,
    /// The message uses travel/location vocabulary.
    pub is_location: bool,
    /// The user asked for one place rather than a list.
    pub is_singular: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_roles_serialize_lowercase() {
        let msg = ChatMessage::assistant("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }

    #[test]
    fn chat_message_round_trips() {
        let parsed: ChatMessage =
            serde_json::from_str(r#"{"role":"user","content":"best ramen"}"#).unwrap();
        assert_eq!(parsed, ChatMessage::user("best ramen"));
    }
}
