//! In-memory candidate roster.
//!
//! The talent pool lives in process memory; there is no database behind it.
//! The stored order is meaningful: newly screened candidates are prepended,
//! and a completed ranking run replaces the whole list so the roster always
//! reflects the latest authoritative ordering.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::candidate::Candidate;

/// Shared, clonable handle to the candidate pool.
#[derive(Clone, Default)]
pub struct CandidateRoster {
    inner: Arc<RwLock<Vec<Candidate>>>,
}

impl CandidateRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a freshly screened candidate at the front of the roster.
    pub async fn add(&self, candidate: Candidate) {
        let mut pool = self.inner.write().await;
        pool.insert(0, candidate);
    }

    /// Returns a snapshot of the roster in its current order.
    pub async fn list(&self) -> Vec<Candidate> {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Candidate> {
        self.inner.read().await.iter().find(|c| c.id == id).cloned()
    }

    /// Replaces the whole roster with a ranked list. Used after a ranking
    /// run so the stored order becomes the post-ranking order.
    pub async fn replace_all(&self, candidates: Vec<Candidate>) {
        *self.inner.write().await = candidates;
    }
}
