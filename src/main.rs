//! FlagStack - Application Entry Point
//!
//! This is the main entry point for the FlagStack CTF server.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flagstack::{
    config::CONFIG,
    constants::API_BASE_PATH,
    handlers,
    middleware::logging::logging_middleware,
    models::ChallengeSet,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FlagStack server...");

    // Load the challenge set
    tracing::info!("Loading challenges from {:?}...", CONFIG.challenges.path);
    let challenges = ChallengeSet::load(&CONFIG.challenges.path)?;
    if challenges.is_empty() {
        tracing::warn!("Challenge set is empty; submissions will all 404");
    } else {
        tracing::info!("Loaded {} challenges", challenges.len());
    }

    // Create application state
    let state = AppState::new(challenges, CONFIG.clone());

    // Build the router
    let app = Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(
        CONFIG.server.host.parse()?,
        CONFIG.server.port,
    );
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
