//! Burns Storage Layer
//!
//! Implements the SessionStore trait on SQLite.
//!
//! # Architecture
//!
//! - One `checklist_entries` table, append-only
//! - Timestamps stored as `YYYY-MM-DD HH:MM:SS` text, so range filters and
//!   ordering run in SQL
//! - File databases open a fresh connection per operation; the connection is
//!   dropped when the operation returns, whether it succeeded or not
//!
//! # Examples
//!
//! ```no_run
//! use burns_domain::{Score, SessionStore};
//! use burns_store::SqliteSessionStore;
//!
//! let mut store = SqliteSessionStore::open("burns_checklist.db").unwrap();
//! store.initialize().unwrap();
//! let id = store.record(Score::new(42).unwrap()).unwrap();
//! ```

#![warn(missing_docs)]

use burns_domain::{
    classify, Clock, RecordedAt, Score, SessionId, SessionRecord, SessionStore, SeverityBand,
    SystemClock,
};
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Default time to wait on a locked database before failing
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SELECT_ENTRIES: &str = "SELECT id, score, depression_level, timestamp FROM checklist_entries";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error (open, lock, read or write failure)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row does not hold a valid session
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Where the database lives
enum Location {
    /// On disk; connected per operation
    File(PathBuf),

    /// In memory; the database only lives as long as this connection
    Memory(Connection),
}

/// SQLite-based implementation of SessionStore
///
/// Timestamps come from the store's clock ([`SystemClock`] unless replaced
/// with [`with_clock`](Self::with_clock)).
///
/// # Thread Safety
///
/// The store is not `Sync`. Concurrent writers in separate processes are
/// serialized by SQLite's own locking, waiting up to the busy timeout.
pub struct SqliteSessionStore<C = SystemClock> {
    location: Location,
    clock: C,
    busy_timeout: Duration,
}

impl SqliteSessionStore<SystemClock> {
    /// Open (creating if needed) a database file
    ///
    /// The schema is not touched; call [`SessionStore::initialize`] once at
    /// startup.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        // Fail early on unusable paths; this connection is dropped right away.
        Connection::open(&path)?;
        debug!(path = %path.display(), "opened session store");

        Ok(Self {
            location: Location::File(path),
            clock: SystemClock,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        })
    }

    /// Create a private in-memory database (useful for testing)
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            location: Location::Memory(Connection::open_in_memory()?),
            clock: SystemClock,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        })
    }
}

impl<C: Clock> SqliteSessionStore<C> {
    /// Replace the clock used to stamp new sessions
    pub fn with_clock<C2: Clock>(self, clock: C2) -> SqliteSessionStore<C2> {
        SqliteSessionStore {
            location: self.location,
            clock,
            busy_timeout: self.busy_timeout,
        }
    }

    /// Set how long an operation waits on a locked database
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Path of the database file, if this store is file-backed
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::File(path) => Some(path),
            Location::Memory(_) => None,
        }
    }

    /// Run `op` against a connection scoped to this call
    fn with_connection<T>(
        &self,
        op: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        match &self.location {
            Location::Memory(conn) => op(conn),
            Location::File(path) => {
                let conn = Connection::open(path)?;
                conn.busy_timeout(self.busy_timeout)?;
                op(&conn)
            }
        }
    }

    /// Run a SELECT over `checklist_entries` and convert every row
    fn fetch_entries(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<SessionRecord>, StoreError> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt
                .query_map(params, RawEntry::from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows.into_iter().map(RawEntry::into_record).collect()
        })
    }
}

impl<C: Clock> SessionStore for SqliteSessionStore<C> {
    type Error = StoreError;

    fn initialize(&self) -> Result<(), Self::Error> {
        self.with_connection(|conn| {
            conn.execute_batch(include_str!("schema.sql"))?;
            Ok(())
        })?;
        debug!("session store schema ready");
        Ok(())
    }

    fn record(&mut self, score: Score) -> Result<SessionId, Self::Error> {
        let band = classify(score);
        let recorded_at = self.clock.now();

        // A single INSERT is atomic: the row exists in full or not at all.
        let id = self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO checklist_entries (score, depression_level, timestamp)
                 VALUES (?1, ?2, ?3)",
                params![i64::from(score), band.label(), recorded_at.format()],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        info!(
            id,
            score = score.value(),
            band = band.label(),
            recorded_at = %recorded_at,
            "recorded checklist session"
        );
        Ok(SessionId::from_value(id))
    }

    fn query_all(&self) -> Result<Vec<SessionRecord>, Self::Error> {
        let sql = format!("{SELECT_ENTRIES} ORDER BY timestamp DESC, id DESC");
        self.fetch_entries(&sql, &[])
    }

    fn query_range(
        &self,
        from: RecordedAt,
        to: RecordedAt,
    ) -> Result<Vec<SessionRecord>, Self::Error> {
        if to < from {
            debug!(%from, %to, "inverted range, nothing to fetch");
            return Ok(Vec::new());
        }

        let sql = format!(
            "{SELECT_ENTRIES} WHERE timestamp >= ?1 AND timestamp <= ?2
             ORDER BY timestamp DESC, id DESC"
        );
        let (from, to) = (from.format(), to.format());
        let records = self.fetch_entries(&sql, &[&from, &to])?;
        debug!(%from, %to, count = records.len(), "range query");
        Ok(records)
    }

    fn count(&self) -> Result<usize, Self::Error> {
        let count: i64 = self.with_connection(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM checklist_entries", [], |row| row.get(0))?)
        })?;

        usize::try_from(count)
            .map_err(|_| StoreError::InvalidData(format!("Negative row count: {}", count)))
    }
}

/// A row as stored, before validation
struct RawEntry {
    id: i64,
    score: i64,
    depression_level: String,
    timestamp: String,
}

impl RawEntry {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            score: row.get(1)?,
            depression_level: row.get(2)?,
            timestamp: row.get(3)?,
        })
    }

    /// Validate into a session record
    ///
    /// Rejects scores outside [0, 100], unknown labels (such as a legacy
    /// "Invalid score" row), labels that disagree with the score, and
    /// malformed timestamps.
    fn into_record(self) -> Result<SessionRecord, StoreError> {
        let score = Score::new(self.score)
            .map_err(|e| StoreError::InvalidData(format!("Entry {}: {}", self.id, e)))?;

        let band = SeverityBand::from_label(&self.depression_level).ok_or_else(|| {
            StoreError::InvalidData(format!(
                "Entry {}: unknown depression level '{}'",
                self.id, self.depression_level
            ))
        })?;
        if band != classify(score) {
            return Err(StoreError::InvalidData(format!(
                "Entry {}: depression level '{}' does not match score {}",
                self.id, band, score
            )));
        }

        let recorded_at = RecordedAt::parse(&self.timestamp).map_err(|e| {
            StoreError::InvalidData(format!(
                "Entry {}: bad timestamp '{}': {}",
                self.id, self.timestamp, e
            ))
        })?;

        Ok(SessionRecord {
            id: SessionId::from_value(self.id),
            score,
            band,
            recorded_at,
        })
    }
}
