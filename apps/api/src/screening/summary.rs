//! Tailored resume summary — one short paragraph highlighting what in the
//! resume matters for a specific job description.

use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::screening::prompts::{SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM};

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    summary: String,
}

/// Generates a tailored summary of the resume for the given job description.
pub async fn generate_summary(
    resume_text: &str,
    job_description: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = SUMMARY_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description);

    let payload: SummaryPayload = llm
        .call_json(&prompt, SUMMARY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Summary generation failed: {e}")))?;

    Ok(payload.summary)
}
