use std::sync::Arc;

use crate::guidance::GuidanceSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable guidance backend. Default: LlmGuidanceSource over the Groq client.
    pub guidance: Arc<dyn GuidanceSource>,
}
