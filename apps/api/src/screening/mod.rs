// Candidate screening & ranking.
// Implements: single-resume screening, pool re-ranking, resume health check,
// tailored summary. All LLM calls go through llm_client — no direct API calls here.

pub mod handlers;
pub mod health;
pub mod prompts;
pub mod ranking;
pub mod scorer;
pub mod summary;
