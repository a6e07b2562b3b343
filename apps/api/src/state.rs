use std::sync::Arc;

use crate::catalogue::CatalogueStore;
use crate::config::Config;
use crate::matching::MatchingEngine;
use crate::profile::ProfileRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only career catalogue, loaded once at startup.
    pub catalogue: Arc<CatalogueStore>,
    /// Session-keyed profile repository. Default: in-memory store.
    pub profiles: Arc<dyn ProfileRepository>,
    /// The matching engine, carrying weights and the optional vector index.
    pub engine: Arc<MatchingEngine>,
    pub config: Config,
}
