use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use jetfriend_core::PlaceRecord;
use jetfriend_places::{DEFAULT_RADIUS_M, MAX_PLURAL_RESULTS};

use super::{AppState, ErrorBody};

#[derive(Deserialize)]
pub struct PlacesRequest {
    pub query: String,
    pub location: Option<String>,
    pub radius: Option<u32>,
}

#[derive(Serialize)]
pub struct PlacesResponse {
    pub success: bool,
    pub places: Vec<PlaceRecord>,
    pub count: usize,
    pub query: String,
    pub location: Option<String>,
}

/// Direct place search without LLM involvement, for front-end debugging.
pub async fn search_places(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlacesRequest>,
) -> Result<Json<PlacesResponse>, (StatusCode, Json<ErrorBody>)> {
    let query = req.query.trim().to_string();
    if query.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Query is required")),
        ));
    }

    let radius = req.radius.unwrap_or(DEFAULT_RADIUS_M);
    let places = state
        .places
        .search(&query, req.location.as_deref(), radius, MAX_PLURAL_RESULTS)
        .await;

    Ok(Json(PlacesResponse {
        success: true,
        count: places.len(),
        places,
        query,
        location: req.location,
    }))
}
