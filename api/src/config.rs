use std::env;
use std::path::PathBuf;

/// Process configuration, read once at startup. A missing API key disables
/// the corresponding feature; it never fails startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub places_api_key: Option<String>,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_parsed("PORT", 5000),
            openai_api_key: env_key("OPENAI_API_KEY"),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| jetfriend_llm::DEFAULT_BASE_URL.to_string()),
            model: env::var("JETFRIEND_MODEL")
                .unwrap_or_else(|_| jetfriend_llm::DEFAULT_MODEL.to_string()),
            max_tokens: env_parsed("JETFRIEND_MAX_TOKENS", 2000),
            temperature: env_parsed("JETFRIEND_TEMPERATURE", 0.7),
            places_api_key: env_key("GOOGLE_PLACES_API_KEY"),
            static_dir: PathBuf::from(
                env::var("JETFRIEND_STATIC_DIR").unwrap_or_else(|_| "./static".to_string()),
            ),
        }
    }
}

/// API key from the environment. Empty values and the `.env.example`
/// placeholders ("your-...-here") count as unset.
fn env_key(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !(v.starts_with("your-") && v.ends_with("-here")))
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
