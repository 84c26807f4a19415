use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured assessment of one resume against one job description,
/// as returned by the screening LLM call.
///
/// `match_score` is nominally 0–100, but the value is stored exactly as the
/// model returned it — a signed type so an out-of-contract score still
/// deserializes and still orders deterministically. List fields keep the
/// model's ordering; they are never re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub match_score: i32,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    /// Bullet-point summary of the resume relative to the job description.
    pub summary: Vec<String>,
}

/// A screened candidate in the talent pool.
///
/// `id` is assigned once at submission and never changes, so selection state
/// in clients survives re-ranking. `screening_result` is always present:
/// a failed re-score keeps the previous result rather than clearing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub resume_text: String,
    pub screening_result: ScreeningResult,
    pub submitted_at: DateTime<Utc>,
}

impl Candidate {
    /// Builds a freshly screened candidate with a new id.
    pub fn new(name: String, resume_text: String, screening_result: ScreeningResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            resume_text,
            screening_result,
            submitted_at: Utc::now(),
        }
    }

    /// Consumes the candidate and returns it with a replaced screening
    /// result. Identity and resume text are preserved.
    pub fn with_result(mut self, screening_result: ScreeningResult) -> Self {
        self.screening_result = screening_result;
        self
    }
}
