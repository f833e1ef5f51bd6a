use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use jetfriend_llm::{ChatCompletion, OpenAiChat};
use jetfriend_places::{GooglePlaces, MockPlaces, PlaceFinder};

use crate::config::AppConfig;
use crate::handlers::{chat, health_check, search_places, test_connectivity, AppState};

/// Build the application router. Split out from [`start_server`] so tests
/// can drive the full pipeline with injected gateway/provider stubs.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any);

    let static_dir = state.config.static_dir.clone();

    let api_routes = Router::new()
        .route("/api/chat", post(chat))
        .route("/api/places", post(search_places))
        .route("/api/health", get(health_check))
        .route("/api/test", get(test_connectivity))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Handler bugs become a generic 500, never a dropped connection.
        .layer(CatchPanicLayer::new());

    // Serve the front end when its build output is present; deep links fall
    // back to index.html.
    if static_dir.is_dir() {
        info!("Serving front end from {:?}", static_dir);
        let index = static_dir.join("index.html");
        api_routes.fallback_service(ServeDir::new(static_dir).not_found_service(ServeFile::new(index)))
    } else {
        api_routes.route("/", get(root_handler))
    }
}

pub async fn start_server(config: AppConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    info!("JetFriend API starting on port {}...", config.port);
    info!(
        "AI chat: {}",
        if config.openai_api_key.is_some() {
            "enabled"
        } else {
            "disabled (set OPENAI_API_KEY)"
        }
    );
    info!(
        "Places: {}",
        if config.places_api_key.is_some() {
            "live search"
        } else {
            "mock fixtures (set GOOGLE_PLACES_API_KEY)"
        }
    );

    let state = Arc::new(build_state(config.clone()));
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Construct the process-wide clients once from configuration. Strategy
/// selection happens here and nowhere else.
pub fn build_state(config: AppConfig) -> AppState {
    let llm: Arc<dyn ChatCompletion> = Arc::new(OpenAiChat::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.model.clone(),
    ));

    let places: Arc<dyn PlaceFinder> = match &config.places_api_key {
        Some(key) => Arc::new(GooglePlaces::new(key.clone())),
        None => Arc::new(MockPlaces::new()),
    };

    AppState {
        config,
        llm,
        places,
    }
}

async fn root_handler() -> &'static str {
    "JetFriend API is running"
}
