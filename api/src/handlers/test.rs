use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use jetfriend_llm::{build_prompt, PERSONA};
use jetfriend_places::DEFAULT_RADIUS_M;

use super::{AppState, ErrorBody};

#[derive(Serialize)]
pub struct TestResponse {
    pub success: bool,
    pub test_response: String,
    pub places_found: usize,
    pub ai_status: &'static str,
    pub places_status: &'static str,
}

/// Exercise the gateway (and the place provider) once and report
/// connectivity. The one endpoint that refuses outright when the LLM key is
/// missing, so deployments notice misconfiguration.
pub async fn test_connectivity(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TestResponse>, (StatusCode, Json<ErrorBody>)> {
    if !state.llm.is_configured() {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorBody::new("OPENAI_API_KEY not configured")),
        ));
    }

    let messages = build_prompt(
        PERSONA,
        &[],
        "Hello! Can you tell me you're working correctly as JetFriend?",
        &[],
    );
    let test_response = state
        .llm
        .complete(&messages, 200, state.config.temperature)
        .await;

    let places = state
        .places
        .search("restaurant", Some("New York"), DEFAULT_RADIUS_M, 3)
        .await;

    Ok(Json(TestResponse {
        success: true,
        test_response,
        places_found: places.len(),
        ai_status: "connected",
        places_status: if state.places.is_live() {
            "connected"
        } else {
            "mock"
        },
    }))
}
