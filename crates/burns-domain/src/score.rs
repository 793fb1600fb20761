//! Score module - validated checklist totals

use crate::band::{classify, SeverityBand};
use std::fmt;
use thiserror::Error;

/// Highest total a response set can produce (25 items x 4 points)
pub const MAX_SCORE: u8 = 100;

/// A raw value fell outside the domain of checklist scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Score outside [0, 100]
    #[error("score {0} is outside the valid range [0, 100]")]
    ScoreOutOfRange(i64),
}

/// Total checklist score
///
/// Always within [0, 100]; out-of-range totals cannot be constructed, so
/// classification never has to handle them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Lowest possible score
    pub const MIN: Score = Score(0);

    /// Highest possible score
    pub const MAX: Score = Score(MAX_SCORE);

    /// Validate a raw integer as a score
    ///
    /// # Examples
    ///
    /// ```
    /// use burns_domain::Score;
    ///
    /// assert_eq!(Score::new(42).unwrap().value(), 42);
    /// assert!(Score::new(101).is_err());
    /// assert!(Score::new(-1).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u8::try_from(value) {
            Ok(v) if v <= MAX_SCORE => Ok(Self(v)),
            _ => Err(DomainError::ScoreOutOfRange(value)),
        }
    }

    /// Wrap a total already known to be in range
    pub(crate) fn from_validated(value: u8) -> Self {
        debug_assert!(value <= MAX_SCORE);
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Severity band for this score
    pub fn band(&self) -> SeverityBand {
        classify(*self)
    }
}

impl TryFrom<i64> for Score {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        i64::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
