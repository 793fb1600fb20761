//! Trait definitions for external interactions
//!
//! These traits define the boundary between the checklist logic and
//! infrastructure. Implementations live in other crates.

use crate::{RecordedAt, Score, SessionId, SessionRecord};

/// Durable, append-only storage of scored sessions
///
/// Implemented by the infrastructure layer (burns-store). The store owns its
/// clock: callers never supply a session's timestamp.
pub trait SessionStore {
    /// Error type for store operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ensure the durable schema exists
    ///
    /// Idempotent; safe to call any number of times.
    fn initialize(&self) -> Result<(), Self::Error>;

    /// Persist a new session for `score`, stamped with the store's current time
    ///
    /// The write is all-or-nothing. On success the session is visible to
    /// every later query.
    fn record(&mut self, score: Score) -> Result<SessionId, Self::Error>;

    /// All sessions, newest first (ties broken by id, highest first)
    fn query_all(&self) -> Result<Vec<SessionRecord>, Self::Error>;

    /// Sessions with `from <= recorded_at <= to`, ordered like [`query_all`](Self::query_all)
    ///
    /// An inverted range yields an empty vector.
    fn query_range(&self, from: RecordedAt, to: RecordedAt)
        -> Result<Vec<SessionRecord>, Self::Error>;

    /// Number of stored sessions
    fn count(&self) -> Result<usize, Self::Error>;
}
