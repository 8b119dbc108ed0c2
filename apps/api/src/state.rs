use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds configuration only. The candidate list is loaded per request.
#[derive(Clone)]
pub struct AppState {
    pub candidates_file: Arc<PathBuf>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            candidates_file: Arc::new(config.candidates_file.clone()),
        }
    }
}
