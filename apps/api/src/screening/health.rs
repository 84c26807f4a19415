//! Resume Health Check — quality analysis of a resume on its own, with no
//! job description involved.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::screening::prompts::{HEALTH_CHECK_PROMPT_TEMPLATE, HEALTH_CHECK_SYSTEM};

/// Scores and feedback from a resume health check. All scores 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckReport {
    /// Overall quality and ATS-friendliness.
    pub ats_score: u32,
    pub grammar_score: u32,
    pub formatting_score: u32,
    /// Actionable improvement suggestions, as bullet points.
    pub feedback: Vec<String>,
}

/// Runs the health check via the LLM and returns the structured report.
pub async fn check_resume(resume_text: &str, llm: &LlmClient) -> Result<HealthCheckReport, AppError> {
    let prompt = HEALTH_CHECK_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    llm.call_json::<HealthCheckReport>(&prompt, HEALTH_CHECK_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume health check failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserializes() {
        let json = r#"{
            "ats_score": 78,
            "grammar_score": 92,
            "formatting_score": 65,
            "feedback": [
                "Use consistent date formats across positions.",
                "Add a skills section near the top."
            ]
        }"#;
        let report: HealthCheckReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.ats_score, 78);
        assert_eq!(report.grammar_score, 92);
        assert_eq!(report.formatting_score, 65);
        assert_eq!(report.feedback.len(), 2);
    }

    #[test]
    fn test_report_requires_all_scores() {
        let json = r#"{"ats_score": 78, "feedback": []}"#;
        let report: Result<HealthCheckReport, _> = serde_json::from_str(json);
        assert!(report.is_err());
    }

    #[test]
    fn test_prompt_embeds_resume() {
        let prompt = HEALTH_CHECK_PROMPT_TEMPLATE.replace("{resume_text}", "the resume body");
        assert!(prompt.contains("the resume body"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
