//! Checklist service - the entry points used by presentation layers
//!
//! Ties the scorer, classifier and a [`SessionStore`] together:
//! - `submit_responses`: score, classify and persist one administration
//! - `fetch_trend`: resolve a [`TrendRange`] and return chartable points
//! - `history`: every session, newest first

use crate::band::{classify, SeverityBand};
use crate::clock::{Clock, SystemClock};
use crate::response::{ResponseSet, ScoreError};
use crate::score::Score;
use crate::session::{SessionId, SessionRecord};
use crate::traits::SessionStore;
use crate::trend::{TrendPoint, TrendRange};
use thiserror::Error;

/// Errors surfaced by the checklist service
#[derive(Debug, Error)]
pub enum ChecklistError<E>
where
    E: std::error::Error + 'static,
{
    /// Responses were rejected before anything was persisted
    #[error("Invalid responses: {0}")]
    Score(#[from] ScoreError),

    /// The store failed; nothing is retried
    #[error("Persistence error: {0}")]
    Persistence(#[source] E),
}

/// Outcome of a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// Identifier of the persisted session
    pub id: SessionId,

    /// Total score
    pub score: Score,

    /// Severity band
    pub band: SeverityBand,
}

/// Checklist service over a session store
pub struct Checklist<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: SessionStore> Checklist<S, SystemClock> {
    /// Create a service that resolves trend ranges against the local clock
    pub fn with_system_clock(store: S) -> Self {
        Self::new(store, SystemClock)
    }
}

impl<S: SessionStore, C: Clock> Checklist<S, C> {
    /// Create a service; `clock` resolves "now" for named trend ranges
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ensure the store's schema exists
    ///
    /// Call once at startup; repeated calls are harmless.
    pub fn initialize(&self) -> Result<(), ChecklistError<S::Error>> {
        self.store.initialize().map_err(ChecklistError::Persistence)
    }

    /// Score, classify and persist a completed questionnaire
    ///
    /// Invalid input is rejected before the store is touched, so a partial
    /// or invalid score is never saved.
    pub fn submit_responses(
        &mut self,
        responses: &[i64],
    ) -> Result<Submission, ChecklistError<S::Error>> {
        let set = ResponseSet::from_values(responses)?;
        self.submit(&set)
    }

    /// Persist an already-validated response set
    pub fn submit(&mut self, responses: &ResponseSet) -> Result<Submission, ChecklistError<S::Error>> {
        let score = responses.score();
        let band = classify(score);
        let id = self
            .store
            .record(score)
            .map_err(ChecklistError::Persistence)?;

        Ok(Submission { id, score, band })
    }

    /// Points for a score-over-time chart, oldest first
    pub fn fetch_trend(&self, range: TrendRange) -> Result<Vec<TrendPoint>, ChecklistError<S::Error>> {
        let (from, to) = range.bounds(self.clock.now());
        let records = self
            .store
            .query_range(from, to)
            .map_err(ChecklistError::Persistence)?;

        // The store returns newest first; charts read left to right.
        Ok(records.iter().rev().map(TrendPoint::from).collect())
    }

    /// Every session, newest first
    pub fn history(&self) -> Result<Vec<SessionRecord>, ChecklistError<S::Error>> {
        self.store.query_all().map_err(ChecklistError::Persistence)
    }
}
