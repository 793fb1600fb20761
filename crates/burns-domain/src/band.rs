//! Severity bands - the classification of a total score

use crate::score::{DomainError, Score};
use std::fmt;
use std::ops::RangeInclusive;

/// Severity band for a checklist score
///
/// The six bands cover [0, 100] with inclusive bounds and no gaps:
/// - 0-5: No Depression
/// - 6-10: Normal but unhappy
/// - 11-25: Mild depression
/// - 26-50: Moderate depression
/// - 51-75: Severe depression
/// - 76-100: Extreme depression
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityBand {
    /// 0-5
    NoDepression,

    /// 6-10
    NormalButUnhappy,

    /// 11-25
    Mild,

    /// 26-50
    Moderate,

    /// 51-75
    Severe,

    /// 76-100
    Extreme,
}

impl SeverityBand {
    /// All bands, least severe first
    pub const ALL: [SeverityBand; 6] = [
        SeverityBand::NoDepression,
        SeverityBand::NormalButUnhappy,
        SeverityBand::Mild,
        SeverityBand::Moderate,
        SeverityBand::Severe,
        SeverityBand::Extreme,
    ];

    /// Label stored alongside each session and shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            SeverityBand::NoDepression => "No Depression",
            SeverityBand::NormalButUnhappy => "Normal but unhappy",
            SeverityBand::Mild => "Mild depression",
            SeverityBand::Moderate => "Moderate depression",
            SeverityBand::Severe => "Severe depression",
            SeverityBand::Extreme => "Extreme depression",
        }
    }

    /// Parse a stored label back into a band
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.label() == label)
    }

    /// Inclusive score bounds of this band
    pub fn range(&self) -> RangeInclusive<u8> {
        match self {
            SeverityBand::NoDepression => 0..=5,
            SeverityBand::NormalButUnhappy => 6..=10,
            SeverityBand::Mild => 11..=25,
            SeverityBand::Moderate => 26..=50,
            SeverityBand::Severe => 51..=75,
            SeverityBand::Extreme => 76..=100,
        }
    }

    /// Classify an unvalidated integer
    ///
    /// Fails instead of producing a placeholder label when the value is not
    /// a reachable score.
    pub fn for_raw(value: i64) -> Result<Self, DomainError> {
        Score::new(value).map(classify)
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for SeverityBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("Unknown severity band: {}", s))
    }
}

/// Map a score to its severity band
///
/// # Examples
///
/// ```
/// use burns_domain::{classify, Score, SeverityBand};
///
/// assert_eq!(classify(Score::new(5).unwrap()), SeverityBand::NoDepression);
/// assert_eq!(classify(Score::new(6).unwrap()), SeverityBand::NormalButUnhappy);
/// ```
pub fn classify(score: Score) -> SeverityBand {
    match score.value() {
        0..=5 => SeverityBand::NoDepression,
        6..=10 => SeverityBand::NormalButUnhappy,
        11..=25 => SeverityBand::Mild,
        26..=50 => SeverityBand::Moderate,
        51..=75 => SeverityBand::Severe,
        _ => SeverityBand::Extreme,
    }
}
