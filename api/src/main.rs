mod config;
mod handlers;
mod server;

use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local development reads keys from a .env file; deployments set real
    // environment variables.
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    server::start_server(config).await
}
