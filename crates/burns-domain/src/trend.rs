//! Trend module - time windows over past sessions and their summaries

use crate::band::SeverityBand;
use crate::score::Score;
use crate::session::{RecordedAt, SessionRecord};

/// Time window selected for a trend chart
///
/// Named windows end at "now" as read from a clock when the trend is
/// fetched; `Custom` uses exactly the bounds given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendRange {
    /// Every session up to now
    AllTime,

    /// The last 7 days
    LastWeek,

    /// The last 30 days
    LastMonth,

    /// The last 365 days
    LastYear,

    /// An explicit inclusive window
    Custom {
        /// Lower bound (inclusive)
        from: RecordedAt,
        /// Upper bound (inclusive)
        to: RecordedAt,
    },
}

impl TrendRange {
    /// Number of days a named window looks back, if it is one
    pub fn lookback_days(&self) -> Option<i64> {
        match self {
            TrendRange::LastWeek => Some(7),
            TrendRange::LastMonth => Some(30),
            TrendRange::LastYear => Some(365),
            TrendRange::AllTime | TrendRange::Custom { .. } => None,
        }
    }

    /// Resolve to concrete inclusive bounds relative to `now`
    ///
    /// # Examples
    ///
    /// ```
    /// use burns_domain::{RecordedAt, TrendRange};
    ///
    /// let now = RecordedAt::from_ymd_hms(2024, 6, 8, 12, 0, 0).unwrap();
    /// let (from, to) = TrendRange::LastWeek.bounds(now);
    /// assert_eq!(from.to_string(), "2024-06-01 12:00:00");
    /// assert_eq!(to, now);
    /// ```
    pub fn bounds(&self, now: RecordedAt) -> (RecordedAt, RecordedAt) {
        match *self {
            TrendRange::AllTime => (RecordedAt::earliest(), now),
            TrendRange::Custom { from, to } => (from, to),
            named => {
                let days = named.lookback_days().unwrap_or_default();
                (now.days_before(days), now)
            }
        }
    }
}

/// One point on a score-over-time chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    /// Total score of the session
    pub score: Score,

    /// When the session was recorded
    pub recorded_at: RecordedAt,
}

impl From<&SessionRecord> for TrendPoint {
    fn from(record: &SessionRecord) -> Self {
        Self {
            score: record.score,
            recorded_at: record.recorded_at,
        }
    }
}

/// Aggregate view of a trend
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary {
    /// Number of sessions in the window
    pub count: usize,

    /// Earliest session in the window
    pub first: TrendPoint,

    /// Most recent session in the window
    pub latest: TrendPoint,

    /// Lowest score
    pub min: Score,

    /// Highest score
    pub max: Score,

    /// Mean score
    pub mean: f64,
}

impl TrendSummary {
    /// Summarise points in any order; `None` when there are none
    pub fn from_points(points: &[TrendPoint]) -> Option<Self> {
        let first = *points.iter().min_by_key(|p| p.recorded_at)?;
        let latest = *points.iter().max_by_key(|p| p.recorded_at)?;
        let min = points.iter().map(|p| p.score).min()?;
        let max = points.iter().map(|p| p.score).max()?;
        let total: u64 = points.iter().map(|p| u64::from(p.score.value())).sum();

        Some(Self {
            count: points.len(),
            first,
            latest,
            min,
            max,
            mean: total as f64 / points.len() as f64,
        })
    }

    /// Score change from the first to the latest session (negative is improvement)
    pub fn change(&self) -> i64 {
        i64::from(self.latest.score) - i64::from(self.first.score)
    }

    /// Band of the latest session
    pub fn latest_band(&self) -> SeverityBand {
        self.latest.score.band()
    }
}
