use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use jetfriend_core::ChatMessage;
use jetfriend_llm::{build_prompt, PERSONA};
use jetfriend_places::{extract_location, find_places, DEFAULT_RADIUS_M};

use super::{AppState, ErrorBody};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub places_found: usize,
    pub enhanced_with_location: bool,
    pub location_detected: bool,
}

/// The chat pipeline: classify the message, optionally enrich it with place
/// records, assemble the prompt, and run the completion. Upstream failures
/// degrade inside the provider and gateway, so this handler only ever
/// rejects malformed requests.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorBody>)> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Message is required")),
        ));
    }

    let flags = jetfriend_intent::classify(message);
    // Small talk keeps the location machinery out of the loop even when the
    // permissive keyword table matches.
    let location_detected = flags.is_location && !flags.is_basic;

    let places = if location_detected {
        let location = extract_location(message);
        find_places(
            state.places.as_ref(),
            message,
            location.as_deref(),
            DEFAULT_RADIUS_M,
            flags.is_singular,
        )
        .await
    } else {
        Vec::new()
    };

    info!(
        "chat message: location={} singular={} places_found={}",
        location_detected,
        flags.is_singular,
        places.len()
    );

    let messages = build_prompt(PERSONA, &req.history, message, &places);
    let response = state
        .llm
        .complete(&messages, state.config.max_tokens, state.config.temperature)
        .await;

    Ok(Json(ChatResponse {
        success: true,
        response,
        places_found: places.len(),
        enhanced_with_location: !places.is_empty(),
        location_detected,
    }))
}
