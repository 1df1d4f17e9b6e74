mod config;
mod error;
mod generation;
mod prompt;
mod routes;
mod state;
mod translate;

use anyhow::{Context, Result};
use axum::Router;
use std::net::{IpAddr, SocketAddr};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use generation::GeneratorFactory;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translation_backend=debug,tower_http=debug")),
        )
        .init();

    let config = Config::discover()?;

    // A missing key is fatal
    let api_key = config.resolve_api_key(|name| std::env::var(name).ok())?;
    info!("API key loaded: Yes");

    let generator = GeneratorFactory::create_generator(&config.llm_config, api_key)?;
    let app_state = AppState::new(config.clone(), generator);

    let app = Router::new()
        .merge(routes::create_routes(&app_state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let host: IpAddr = config
        .system_config
        .host
        .parse()
        .with_context(|| format!("HOST must be a valid IP address, got {:?}", config.system_config.host))?;
    let addr = SocketAddr::new(host, config.system_config.port);
    info!(
        "Starting server on {} (request timeout {:?})",
        addr,
        config.request_timeout()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
