pub mod chat;
pub mod health;
pub mod places;
pub mod test;

pub use chat::chat;
pub use health::health_check;
pub use places::search_places;
pub use test::test_connectivity;

use jetfriend_llm::ChatCompletion;
use jetfriend_places::PlaceFinder;
use serde::Serialize;
use std::sync::Arc;

use crate::config::AppConfig;

/// Shared, read-only application state. Built once at startup; the clients
/// are safe for concurrent use across request handlers.
pub struct AppState {
    pub config: AppConfig,
    pub llm: Arc<dyn ChatCompletion>,
    pub places: Arc<dyn PlaceFinder>,
}

/// Structured error body for 4xx/5xx responses.
#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
