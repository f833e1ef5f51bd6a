use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub features: Features,
}

#[derive(Serialize)]
pub struct Features {
    pub ai_chat: bool,
    pub live_places: bool,
    pub mock_places: bool,
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let live_places = state.places.is_live();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "JetFriend API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: Features {
            ai_chat: state.llm.is_configured(),
            live_places,
            mock_places: !live_places,
        },
    })
}
