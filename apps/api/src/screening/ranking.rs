//! Ranking — re-scores the whole candidate pool against one job description.
//!
//! One scorer call per candidate, fanned out concurrently with a bounded
//! number in flight, then a join over all outcomes before anything is
//! emitted. A candidate whose call fails keeps its previous screening
//! result; the batch itself cannot fail once started, and the output always
//! contains exactly the input candidates.

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::models::candidate::Candidate;
use crate::screening::scorer::ResumeScorer;

/// Re-scores `candidates` against `job_description` and returns them sorted
/// by `match_score` descending.
///
/// At most `max_in_flight` scoring calls run concurrently; outcomes are
/// collected in input order, so candidates with equal scores keep their
/// input order (the sort is stable). An empty pool returns immediately
/// without touching the scorer.
pub async fn rank_candidates(
    scorer: &dyn ResumeScorer,
    job_description: &str,
    candidates: Vec<Candidate>,
    max_in_flight: usize,
) -> Vec<Candidate> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let total = candidates.len();

    let outcomes: Vec<(Candidate, bool)> = stream::iter(candidates)
        .map(|candidate| rescore_one(scorer, job_description, candidate))
        .buffered(max_in_flight.max(1))
        .collect()
        .await;

    let rescored = outcomes.iter().filter(|(_, fresh)| *fresh).count();
    if rescored < total {
        warn!(
            total,
            kept_previous = total - rescored,
            "some candidates kept their previous scores"
        );
    }
    info!(total, rescored, "candidate ranking complete");

    let mut ranked: Vec<Candidate> = outcomes.into_iter().map(|(c, _)| c).collect();
    ranked.sort_by(|a, b| {
        b.screening_result
            .match_score
            .cmp(&a.screening_result.match_score)
    });
    ranked
}

/// Scores one candidate; on failure the candidate is returned unchanged so
/// it is never dropped from the pool. The second element reports whether
/// the result is fresh.
async fn rescore_one(
    scorer: &dyn ResumeScorer,
    job_description: &str,
    candidate: Candidate,
) -> (Candidate, bool) {
    match scorer.score(&candidate.resume_text, job_description).await {
        Ok(result) => {
            debug!(
                candidate_id = %candidate.id,
                match_score = result.match_score,
                "candidate re-scored"
            );
            (candidate.with_result(result), true)
        }
        Err(err) => {
            warn!(
                candidate_id = %candidate.id,
                error = %err,
                "re-scoring failed, keeping previous result"
            );
            (candidate, false)
        }
    }
}
