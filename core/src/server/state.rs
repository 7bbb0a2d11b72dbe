//! Shared application state for the HTTP service.

use crate::ai::TextGenerator;
use crate::store::ItemStore;
use std::sync::Arc;

/// Shared state accessible by all handlers via axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    pub auth_token: Option<String>,
    pub store: Arc<dyn ItemStore>,
    /// Tried before the keyword rules when present.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub max_concurrent: usize,
    /// Per-call generator limit before the keyword rules answer.
    pub timeout_secs: u64,
}

pub type SharedState = Arc<AppState>;
