//! Axum route handlers for the Screening API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::screening::health::{check_resume, HealthCheckReport};
use crate::screening::ranking::rank_candidates;
use crate::screening::scorer::ResumeScorer;
use crate::screening::summary::generate_summary;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    pub name: String,
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub candidate: Candidate,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub ranked_candidates: Vec<Candidate>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<Candidate>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ResumeHealthRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screen
///
/// Screens one resume against a job description, adds the candidate to the
/// roster, and returns the stored candidate.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<ScreenResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let result = state
        .scorer
        .score(&request.resume_text, &request.job_description)
        .await
        .map_err(|e| AppError::Llm(format!("Screening failed: {e}")))?;

    let candidate = Candidate::new(request.name, request.resume_text, result);
    info!(
        candidate_id = %candidate.id,
        match_score = candidate.screening_result.match_score,
        "candidate screened"
    );

    state.roster.add(candidate.clone()).await;

    Ok(Json(ScreenResponse { candidate }))
}

/// GET /api/v1/candidates
///
/// Returns the roster in its current (most recently ranked) order.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let candidates = state.roster.list().await;
    let total = candidates.len();
    Ok(Json(CandidateListResponse { candidates, total }))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<Candidate>, AppError> {
    state
        .roster
        .get(candidate_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))
}

/// POST /api/v1/candidates/search
///
/// Re-scores the whole roster against a new job description and returns the
/// ranked pool. The ranked order is stored back as the authoritative roster
/// order. Candidates whose re-score fails keep their previous result; an
/// empty roster yields an empty ranking, not an error.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let pool = state.roster.list().await;
    info!(pool_size = pool.len(), "ranking candidate pool");

    let ranked = rank_candidates(
        state.scorer.as_ref(),
        &request.job_description,
        pool,
        state.config.scoring_concurrency,
    )
    .await;

    state.roster.replace_all(ranked.clone()).await;

    Ok(Json(SearchResponse {
        total: ranked.len(),
        ranked_candidates: ranked,
    }))
}

/// POST /api/v1/resume/health-check
///
/// Quality analysis of a resume alone — no job description involved.
pub async fn handle_resume_health(
    State(state): State<AppState>,
    Json(request): Json<ResumeHealthRequest>,
) -> Result<Json<HealthCheckReport>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let report = check_resume(&request.resume_text, &state.llm).await?;
    Ok(Json(report))
}

/// POST /api/v1/resume/summary
///
/// Tailored one-paragraph summary of a resume against a job description.
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let summary = generate_summary(&request.resume_text, &request.job_description, &state.llm).await?;
    Ok(Json(SummaryResponse { summary }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::roster::CandidateRoster;
    use crate::screening::scorer::LlmResumeScorer;

    fn test_state() -> AppState {
        let config = Config {
            anthropic_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            scoring_concurrency: 4,
            scoring_timeout_secs: 5,
        };
        let llm = LlmClient::new(config.anthropic_api_key.clone());
        AppState {
            scorer: Arc::new(LlmResumeScorer::new(llm.clone())),
            llm,
            config,
            roster: CandidateRoster::new(),
        }
    }

    #[tokio::test]
    async fn test_screen_rejects_blank_resume() {
        let result = handle_screen(
            State(test_state()),
            Json(ScreenRequest {
                name: "Jane".to_string(),
                resume_text: "   ".to_string(),
                job_description: "Senior Engineer".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_search_rejects_blank_job_description() {
        let result = handle_search(
            State(test_state()),
            Json(SearchRequest {
                job_description: "".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_search_on_empty_roster_returns_empty_ranking() {
        // No candidates in the pool: the orchestrator short-circuits before
        // any scorer call, so this never leaves the process.
        let result = handle_search(
            State(test_state()),
            Json(SearchRequest {
                job_description: "Lead Product Manager, 7+ years".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(result.0.total, 0);
        assert!(result.0.ranked_candidates.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_candidate_is_not_found() {
        let result =
            handle_get_candidate(State(test_state()), Path(uuid::Uuid::new_v4())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
