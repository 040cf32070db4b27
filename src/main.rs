use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use doraemon_relay::config::RelayConfig;
use doraemon_relay::llm::GeminiClient;
use doraemon_relay::relay::Relay;
use doraemon_relay::routes::configure_routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let client = match GeminiClient::new(config.api_key.as_str(), config.model) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to initialise Gemini client: {}", e);
            std::process::exit(1);
        }
    };

    let relay = Arc::new(Relay::new(Arc::new(client)));
    let routes = configure_routes(relay);

    tracing::info!(model = config.model.as_str(), "Starting server on http://{}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;
}
