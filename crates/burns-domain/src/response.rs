//! Response module - item ratings and the scorer

use crate::questionnaire::{Rating, ITEM_COUNT};
use crate::score::Score;
use thiserror::Error;

/// Why a set of raw ratings could not be scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Wrong number of responses
    #[error("expected exactly {expected} responses, got {actual}")]
    Shape {
        /// Required number of responses
        expected: usize,
        /// Number actually supplied
        actual: usize,
    },

    /// A response outside [0, 4]
    #[error("response {} is {value}; each response must be an integer between 0 and 4", .index + 1)]
    Range {
        /// Zero-based position of the offending response
        index: usize,
        /// The rejected value
        value: i64,
    },
}

/// A single item rating in [0, 4]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemResponse(u8);

impl ItemResponse {
    /// Validate a raw rating
    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Rating::MAX)
            .map(Self)
    }

    /// Get the raw value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Rating scale point for this response
    pub fn rating(&self) -> Rating {
        Rating::from_points(self.0).unwrap_or(Rating::Extremely)
    }
}

impl From<Rating> for ItemResponse {
    fn from(rating: Rating) -> Self {
        Self(rating.points())
    }
}

/// A complete, validated set of 25 responses
///
/// Position `i` holds the answer to question `i`; the order is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSet([ItemResponse; ITEM_COUNT]);

impl ResponseSet {
    /// Validate raw ratings into a response set
    ///
    /// The length is checked first. Every element is then checked, and the
    /// first position holding an invalid rating is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use burns_domain::{ResponseSet, ScoreError};
    ///
    /// let set = ResponseSet::from_values(&[2; 25]).unwrap();
    /// assert_eq!(set.score().value(), 50);
    ///
    /// let err = ResponseSet::from_values(&[0; 24]).unwrap_err();
    /// assert_eq!(err, ScoreError::Shape { expected: 25, actual: 24 });
    /// ```
    pub fn from_values(values: &[i64]) -> Result<Self, ScoreError> {
        if values.len() != ITEM_COUNT {
            return Err(ScoreError::Shape {
                expected: ITEM_COUNT,
                actual: values.len(),
            });
        }

        let mut items = [ItemResponse(0); ITEM_COUNT];
        let mut first_invalid = None;
        for (index, &value) in values.iter().enumerate() {
            match ItemResponse::new(value) {
                Some(item) => items[index] = item,
                None => {
                    first_invalid.get_or_insert(ScoreError::Range { index, value });
                }
            }
        }

        match first_invalid {
            Some(err) => Err(err),
            None => Ok(Self(items)),
        }
    }

    /// Build a response set from typed ratings
    pub fn from_ratings(ratings: [Rating; ITEM_COUNT]) -> Self {
        Self(ratings.map(ItemResponse::from))
    }

    /// Total score: the sum of all 25 ratings
    pub fn score(&self) -> Score {
        let total: u8 = self.0.iter().map(ItemResponse::value).sum();
        Score::from_validated(total)
    }

    /// Responses in question order
    pub fn responses(&self) -> &[ItemResponse] {
        &self.0
    }

    /// Response to the question at `index` (zero-based)
    pub fn get(&self, index: usize) -> Option<ItemResponse> {
        self.0.get(index).copied()
    }
}

/// Score a raw sequence of ratings
///
/// Fails with [`ScoreError::Shape`] unless exactly 25 ratings are given, and
/// with [`ScoreError::Range`] if any rating is outside [0, 4].
pub fn score(responses: &[i64]) -> Result<Score, ScoreError> {
    ResponseSet::from_values(responses).map(|set| set.score())
}
