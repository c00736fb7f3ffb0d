use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend behind a trait object so tests can stub the
    /// external service. Production: `OpenAiClient`.
    pub llm: Arc<dyn CompletionClient>,
    pub config: Config,
}
