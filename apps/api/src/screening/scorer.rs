//! Scorer — pluggable, trait-based evaluation of one resume against one JD.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`, so the ranking orchestrator
//! can be driven by a deterministic fake in tests while production uses
//! `LlmResumeScorer`.

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::{LlmClient, LlmError};
use crate::models::candidate::ScreeningResult;
use crate::screening::prompts::{SCREENING_PROMPT_TEMPLATE, SCREENING_SYSTEM};

/// A single scoring call failed. Recoverable: the ranking orchestrator
/// keeps the candidate's previous result and moves on.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// The oracle could not be reached or refused the call
    /// (transport failure, timeout, rate limit, non-2xx, empty content).
    #[error("scoring oracle unavailable: {0}")]
    Oracle(LlmError),

    /// The oracle answered, but the payload did not match the
    /// screening-result contract.
    #[error("scoring oracle returned malformed output: {0}")]
    Contract(serde_json::Error),
}

impl From<LlmError> for ScoringError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => ScoringError::Contract(e),
            other => ScoringError::Oracle(other),
        }
    }
}

/// The scorer trait. One invocation makes exactly one evaluation of
/// `(resume_text, job_description)` — no retries, no caching. The backing
/// oracle is non-deterministic, so two calls with identical inputs may
/// disagree.
#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<ScreeningResult, ScoringError>;
}

/// Production scorer backed by the LLM client.
///
/// Resume text is passed through whole: an input too large for the API
/// fails the call rather than being truncated into a silently different
/// score.
pub struct LlmResumeScorer {
    llm: LlmClient,
}

impl LlmResumeScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeScorer for LlmResumeScorer {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<ScreeningResult, ScoringError> {
        let prompt = build_screening_prompt(resume_text, job_description);
        let result: ScreeningResult = self.llm.call_json(&prompt, SCREENING_SYSTEM).await?;
        Ok(result)
    }
}

fn build_screening_prompt(resume_text: &str, job_description: &str) -> String {
    SCREENING_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_both_inputs() {
        let prompt = build_screening_prompt(
            "Jane Doe, seven years of React.",
            "Senior Frontend Engineer, React required.",
        );
        assert!(prompt.contains("Jane Doe, seven years of React."));
        assert!(prompt.contains("Senior Frontend Engineer, React required."));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_prompt_keeps_resume_untruncated() {
        let resume = "x".repeat(200_000);
        let prompt = build_screening_prompt(&resume, "short JD");
        assert!(prompt.len() > 200_000);
    }

    #[test]
    fn test_parse_failures_map_to_contract_error() {
        let parse_err = serde_json::from_str::<ScreeningResult>("not json").unwrap_err();
        let scoring: ScoringError = LlmError::Parse(parse_err).into();
        assert!(matches!(scoring, ScoringError::Contract(_)));
    }

    #[test]
    fn test_transport_failures_map_to_oracle_error() {
        let scoring: ScoringError = LlmError::EmptyContent.into();
        assert!(matches!(scoring, ScoringError::Oracle(LlmError::EmptyContent)));

        let scoring: ScoringError = LlmError::RateLimited.into();
        assert!(matches!(scoring, ScoringError::Oracle(LlmError::RateLimited)));
    }
}
