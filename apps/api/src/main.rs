mod catalogue;
mod config;
mod errors;
mod matching;
mod models;
mod profile;
mod riasec;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalogue::{load_catalogue, BruteForceIndex, VectorIndex};
use crate::config::Config;
use crate::matching::{MatchWeights, MatchingEngine};
use crate::profile::{InMemorySessionStore, ProfileRepository};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Disha API v{}", env!("CARGO_PKG_VERSION"));

    // Load the catalogue; a failure here is fatal, never per-request
    let catalogue = Arc::new(load_catalogue(Path::new(&config.data_file))?);
    info!("Career catalogue ready: {} records", catalogue.len());

    // Build the vector index over the catalogue documents
    let index = BruteForceIndex::build(&catalogue);
    info!("Vector index built ({} vocabulary terms)", index.dimensions());
    let index: Arc<dyn VectorIndex> = Arc::new(index);

    let engine = Arc::new(MatchingEngine::new(
        MatchWeights::default(),
        Some(index),
        config.min_match_percentage,
    ));

    let profiles: Arc<dyn ProfileRepository> =
        Arc::new(InMemorySessionStore::new(config.session_timeout_secs));

    let state = AppState {
        catalogue,
        profiles,
        engine,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
