use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::roster::CandidateRoster;
use crate::screening::scorer::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Used directly by the health-check and summary flows.
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable scorer. Production: `LlmResumeScorer`; tests swap in fakes.
    pub scorer: Arc<dyn ResumeScorer>,
    /// In-memory talent pool; its order is the latest ranking.
    pub roster: CandidateRoster,
}
