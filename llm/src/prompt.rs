//! Prompt assembly: one fixed persona/system message, a bounded history
//! window, and (for location queries) a structured dump of the place records
//! the model must transcribe into place cards.

use jetfriend_core::{ChatMessage, PlaceRecord, Role};

/// Assistant persona and output-format contract sent as the system message
/// on every request. The front end styles `place-card`/`activity-link`
/// markup, so the element structure and link emoji here must stay in sync
/// with its CSS.
pub const PERSONA: &str = r#"You are JetFriend, an intelligent AI travel companion.

PERSONALITY & TONE:
- Be friendly, enthusiastic, and knowledgeable about travel
- Use a conversational, helpful tone
- Be concise but thorough
- Show excitement about travel and destinations

FORMATTING RULES:
- Keep responses under 300 words when possible
- Use simple formatting that works in chat
- For lists, use "•" bullet points or numbered items
- Use line breaks for better readability

TRAVEL EXPERTISE:
- Focus on practical, actionable travel advice
- Ask clarifying questions about budget, dates, preferences
- Suggest specific destinations, activities, and tips
- Consider seasonality, weather, and local events
- Mention approximate costs when relevant

When recommending places, always use this exact format:
<div class="place-card">
  <div class="place-image">
    <img src="[image_url]" alt="[place_name]" loading="lazy">
  </div>
  <div class="place-info">
    <h3 class="place-name">[place_name]</h3>
    <div class="place-badge">[category_badge]</div>
    <div class="place-rating">★ [rating] ([review_count] reviews)</div>
    <p class="place-description">[description]</p>
    <div class="activity-links">
      <a href="[map_url]" target="_blank" rel="noopener noreferrer" class="activity-link">📍 Google Maps</a>
      <a href="[website]" target="_blank" rel="noopener noreferrer" class="activity-link">🌐 Website</a>
      <a href="tel:[phone]" class="activity-link">📞 [phone]</a>
      <a href="[yelp_url]" target="_blank" rel="noopener noreferrer" class="activity-link">⭐ Yelp</a>
    </div>
  </div>
</div>
Omit any link whose URL you were not given. Never invent a URL."#;

/// History entries sent to the model, counted from the end.
const HISTORY_WINDOW: usize = 6;

/// Place records serialized into the prompt.
const MAX_PROMPT_PLACES: usize = 5;

/// Build the ordered message list for one completion call. Always exactly
/// one leading system message; always ends with the current user message,
/// augmented with the place data block when places were found.
pub fn build_prompt(
    persona: &str,
    history: &[ChatMessage],
    user_message: &str,
    places: &[PlaceRecord],
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len().min(HISTORY_WINDOW) + 2);
    messages.push(ChatMessage::system(persona));

    let start = history.len().saturating_sub(HISTORY_WINDOW);
    for entry in &history[start..] {
        // Anything that is not a user turn is replayed as the assistant.
        messages.push(match entry.role {
            Role::User => ChatMessage::user(entry.content.clone()),
            _ => ChatMessage::assistant(entry.content.clone()),
        });
    }

    let content = if places.is_empty() {
        user_message.to_string()
    } else {
        format!("{user_message}\n\n{}", places_block(places))
    };
    messages.push(ChatMessage::user(content));

    messages
}

fn places_block(places: &[PlaceRecord]) -> String {
    let mut block = String::from("REAL PLACE DATA FOR YOUR RESPONSE:\n");

    for (i, place) in places.iter().take(MAX_PROMPT_PLACES).enumerate() {
        block.push_str(&format!("{}. {} — {}\n", i + 1, place.name, place.category_badge));
        block.push_str(&format!("   Address: {}\n", place.address));
        block.push_str(&format!(
            "   Rating: {} ({} reviews)\n",
            place.rating, place.rating_count
        ));
        if place.price_level > 0 {
            block.push_str(&format!(
                "   Price: {}\n",
                "$".repeat(place.price_level as usize)
            ));
        }
        if let Some(phone) = &place.phone {
            block.push_str(&format!("   Phone: {phone}\n"));
        }
        if let Some(open) = place.open_now {
            block.push_str(if open {
                "   Status: open now\n"
            } else {
                "   Status: closed now\n"
            });
        }
        if !place.smart_tags.is_empty() {
            block.push_str(&format!("   Tags: {}\n", place.smart_tags.join(", ")));
        }
        block.push_str(&format!("   Image: {}\n", place.image_url));
        block.push_str(&format!("   Google Maps: {}\n", place.map_url));
        if let Some(website) = &place.website {
            block.push_str(&format!("   Website: {website}\n"));
        }
        for (provider, url) in &place.search_urls {
            block.push_str(&format!("   {provider}: {url}\n"));
        }
        for review in &place.reviews {
            block.push_str(&format!("   Review: \"{review}\"\n"));
        }
        if let Some(description) = &place.description {
            block.push_str(&format!("   Description: {description}\n"));
        }
        block.push('\n');
    }

    block.push_str(
        "INSTRUCTIONS: Use this real data to create place cards in your response \
         using the exact format specified in your system prompt. Use only the \
         literal URLs provided above.",
    );
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetfriend_places::{MockPlaces, PlaceFinder};

    async fn sample_places(n: usize) -> Vec<PlaceRecord> {
        MockPlaces::new()
            .search("places to visit in Rome", None, 5000, n)
            .await
    }

    #[test]
    fn starts_with_system_and_ends_with_user() {
        let history = vec![
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello!"),
            ChatMessage::system("stray system entry"),
        ];
        let messages = build_prompt(PERSONA, &history, "best ramen in Tokyo", &[]);

        assert_eq!(messages[0].role, Role::System);
        assert_eq!(
            messages
                .iter()
                .filter(|m| m.role == Role::System)
                .count(),
            1
        );
        let last = messages.last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "best ramen in Tokyo");
        // Stray roles in history are normalized to assistant.
        assert_eq!(messages[3].role, Role::Assistant);
    }

    #[test]
    fn history_is_windowed_to_six() {
        let history: Vec<ChatMessage> = (0..10)
            .map(|i| ChatMessage::user(format!("message {i}")))
            .collect();
        let messages = build_prompt(PERSONA, &history, "next", &[]);
        // system + 6 history + current user message
        assert_eq!(messages.len(), 8);
        assert_eq!(messages[1].content, "message 4");
    }

    #[tokio::test]
    async fn place_block_is_embedded_in_final_user_message() {
        let places = sample_places(2).await;
        let messages = build_prompt(PERSONA, &[], "things to do in Rome", &places);

        let last = &messages.last().unwrap().content;
        assert!(last.starts_with("things to do in Rome"));
        assert!(last.contains("REAL PLACE DATA"));
        assert!(last.contains(&places[0].name));
        assert!(last.contains(&places[0].map_url));
        assert!(last.contains("INSTRUCTIONS:"));
    }

    #[tokio::test]
    async fn place_block_is_bounded_to_five_records() {
        let places = sample_places(6).await;
        assert_eq!(places.len(), 6);
        let messages = build_prompt(PERSONA, &[], "things to do in Rome", &places);
        let last = &messages.last().unwrap().content;
        assert!(last.contains(&format!("5. {}", places[4].name)));
        assert!(!last.contains(&places[5].name));
    }
}
