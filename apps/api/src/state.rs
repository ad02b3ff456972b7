use std::sync::Arc;

use sqlx::PgPool;

use crate::recommend::narrator::NarrativeGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable narrative generator: live chat-completion client or the
    /// offline static templates, chosen once at startup.
    pub narrator: Arc<dyn NarrativeGenerator>,
}
