use std::sync::Arc;

use crate::config::Config;
use crate::crew::Crew;
use crate::llm_client::CompletionModel;
use crate::render::store::ImprovedResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production; a scripted model in tests.
    pub llm: Arc<dyn CompletionModel>,
    /// Built and validated once at startup.
    pub crew: Arc<Crew>,
    pub store: ImprovedResumeStore,
    pub config: Config,
}
