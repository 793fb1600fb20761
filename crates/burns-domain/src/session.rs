//! Session module - persisted, scored administrations of the checklist

use crate::band::{classify, SeverityBand};
use crate::score::Score;
use chrono::{NaiveDate, NaiveDateTime, SubsecRound, TimeDelta};
use std::fmt;

/// Storage format of session timestamps (local time, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Store-assigned session identifier
///
/// Identifiers strictly increase with insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(i64);

impl SessionId {
    /// Create a SessionId from a raw value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Local wall-clock instant at which a session was recorded
///
/// Sub-second precision is always discarded so that values compare exactly
/// like their stored `YYYY-MM-DD HH:MM:SS` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordedAt(NaiveDateTime);

impl RecordedAt {
    /// Create from a naive local date-time, truncating to the second
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime.trunc_subsecs(0))
    }

    /// Build from calendar fields
    ///
    /// # Examples
    ///
    /// ```
    /// use burns_domain::RecordedAt;
    ///
    /// let at = RecordedAt::from_ymd_hms(2024, 3, 1, 9, 30, 0).unwrap();
    /// assert_eq!(at.to_string(), "2024-03-01 09:30:00");
    /// ```
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .map(Self)
    }

    /// Earliest instant representable in the storage format (`0001-01-01 00:00:00`)
    pub fn earliest() -> Self {
        NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
            .unwrap_or(Self(NaiveDateTime::MIN))
    }

    /// Parse the storage format
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map(Self)
    }

    /// Render in the storage format
    pub fn format(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Underlying date-time
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// This instant moved back by whole days, clamped at [`RecordedAt::earliest`]
    pub fn days_before(&self, days: i64) -> Self {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_sub_signed(delta))
            .map(Self)
            .filter(|at| *at >= Self::earliest())
            .unwrap_or_else(Self::earliest)
    }

    /// Seconds since the Unix epoch, treating the value as UTC
    ///
    /// Only meaningful for relative placement, e.g. on a chart axis.
    pub fn timestamp(&self) -> i64 {
        self.0.and_utc().timestamp()
    }
}

impl fmt::Display for RecordedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl std::str::FromStr for RecordedAt {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDateTime> for RecordedAt {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

/// A scored session as persisted by a [`SessionStore`](crate::SessionStore)
///
/// Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Store-assigned identifier
    pub id: SessionId,

    /// Total score
    pub score: Score,

    /// Severity band, derived from `score`
    pub band: SeverityBand,

    /// When the store recorded the session
    pub recorded_at: RecordedAt,
}

impl SessionRecord {
    /// Create a record, deriving the band from the score
    pub fn new(id: SessionId, score: Score, recorded_at: RecordedAt) -> Self {
        Self {
            id,
            score,
            band: classify(score),
            recorded_at,
        }
    }
}
