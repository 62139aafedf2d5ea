use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Provider behind a trait object so handler tests can swap in a stub.
    /// Constructed once at startup — there is no process-wide singleton.
    pub generator: Arc<dyn TextGenerator>,
    /// Kept for handlers that grow config-dependent behavior; only startup
    /// reads it today.
    #[allow(dead_code)]
    pub config: Config,
}
