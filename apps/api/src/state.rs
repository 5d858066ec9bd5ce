use std::sync::Arc;

use crate::config::Config;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable résumé storage. Default: in-process `MemoryStore`.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
}
