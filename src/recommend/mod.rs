//! Recommendation lookup and best-effort persistence.
//!
//! The repository is an external collaborator and the conversation must
//! survive it being down: lookups degrade to a fixed fallback and record
//! inserts are fire-and-forget. Neither path ever surfaces a storage error
//! to the user.

use crate::calc::Calculation;
use crate::core::{InputSet, Scenario};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

/// Fallback model returned whenever the repository cannot answer.
pub const FALLBACK_RECOMMENDATION: &str = "Mock Model";

/// Errors surfaced by repository adapters.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    #[error("stored record is malformed: {0}")]
    Malformed(String),
}

/// A catalog entry matched by stroke length.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StoredRecommendation {
    pub stroke_mm: f64,
    pub recommendations: Vec<String>,
}

/// Completed-session record. Append-only from the engine's side: written
/// once at the terminal state, never read back by the conversation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub id: Uuid,
    pub scenario: Scenario,
    pub inputs: InputSet,
    pub calculations: Calculation,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl RecommendationRecord {
    pub fn new(
        scenario: Scenario,
        inputs: InputSet,
        calculations: Calculation,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            scenario,
            inputs,
            calculations,
            recommendations,
            created_at: Utc::now(),
        }
    }
}

/// Storage contract for recommendation lookups and session records.
///
/// Adapters own their transport concerns (connection handling, timeouts);
/// the engine only requires that failures come back as [`RepositoryError`]
/// so they can be degraded gracefully.
pub trait RecommendationRepository {
    /// Look up the catalog entry for a stroke length, if one exists.
    fn find_by_stroke(&self, stroke_mm: f64)
        -> Result<Option<StoredRecommendation>, RepositoryError>;

    /// Append a completed-session record.
    fn insert(&self, record: &RecommendationRecord) -> Result<(), RepositoryError>;
}

/// Resolve the recommendation list for a stroke length.
///
/// A missing record and a failing repository both land on the fixed
/// fallback; repository errors are logged and never reach the caller.
pub fn resolve<R: RecommendationRepository>(repo: &R, stroke_mm: f64) -> Vec<String> {
    match repo.find_by_stroke(stroke_mm) {
        Ok(Some(stored)) => stored.recommendations,
        Ok(None) => fallback(),
        Err(error) => {
            tracing::warn!(%error, stroke_mm, "recommendation lookup failed, using fallback");
            fallback()
        }
    }
}

/// Best-effort insert of a completed-session record. A failure is logged
/// and swallowed; persistence never affects the reply already composed.
pub fn persist<R: RecommendationRepository>(repo: &R, record: &RecommendationRecord) {
    if let Err(error) = repo.insert(record) {
        tracing::warn!(%error, record_id = %record.id, "dropping session record, insert failed");
    }
}

fn fallback() -> Vec<String> {
    vec![FALLBACK_RECOMMENDATION.to_string()]
}

/// In-memory repository for demos and tests: a seedable catalog plus the
/// records inserted so far.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    catalog: Arc<Mutex<Vec<StoredRecommendation>>>,
    records: Arc<Mutex<Vec<RecommendationRecord>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a catalog entry for lookups to find.
    pub fn seed(&self, entry: StoredRecommendation) {
        self.catalog.lock().expect("catalog lock poisoned").push(entry);
    }

    /// Snapshot of every record inserted so far.
    pub fn records(&self) -> Vec<RecommendationRecord> {
        self.records.lock().expect("records lock poisoned").clone()
    }
}

impl RecommendationRepository for InMemoryRepository {
    fn find_by_stroke(
        &self,
        stroke_mm: f64,
    ) -> Result<Option<StoredRecommendation>, RepositoryError> {
        let catalog = self
            .catalog
            .lock()
            .map_err(|_| RepositoryError::Unavailable("catalog lock poisoned".into()))?;
        Ok(catalog
            .iter()
            .find(|entry| entry.stroke_mm == stroke_mm)
            .cloned())
    }

    fn insert(&self, record: &RecommendationRecord) -> Result<(), RepositoryError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("records lock poisoned".into()))?;
        records.push(record.clone());
        Ok(())
    }
}
