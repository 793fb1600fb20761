//! The fixed 25-item questionnaire and its rating scale
//!
//! Item order is part of the instrument: position `i` of a response set is
//! the answer to `QUESTIONS[i]`.

use std::fmt;

/// Number of items in the checklist
pub const ITEM_COUNT: usize = 25;

/// Item texts, in administration order
pub const QUESTIONS: [&str; ITEM_COUNT] = [
    "Feeling sad or down in the dumps",
    "Feeling unhappy or blue",
    "Crying spells or tearfulness",
    "Feeling discouraged",
    "Feeling hopeless",
    "Low self-esteem",
    "Feeling worthless or inadequate",
    "Guilt or shame",
    "Criticizing yourself or others",
    "Difficulty making decisions",
    "Loss of interest in family, friends or colleagues",
    "Loneliness",
    "Spending less time with family or friends",
    "Loss of motivation",
    "Loss of interest in work or other activities",
    "Avoiding work or other activities",
    "Loss of pleasure or satisfaction in life",
    "Feeling tired",
    "Difficulty sleeping or sleeping too much",
    "Decreased or increased appetite",
    "Loss of interest in sex",
    "Worrying about your health",
    "Do you have any suicidal thoughts?",
    "Would you like to end your life?",
    "Do you have a plan for harming yourself?",
];

/// Points on the per-item rating scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    /// 0 points
    NotAtAll,
    /// 1 point
    Somewhat,
    /// 2 points
    Moderately,
    /// 3 points
    ALot,
    /// 4 points
    Extremely,
}

impl Rating {
    /// All ratings, lowest first
    pub const ALL: [Rating; 5] = [
        Rating::NotAtAll,
        Rating::Somewhat,
        Rating::Moderately,
        Rating::ALot,
        Rating::Extremely,
    ];

    /// Highest rating value an item accepts
    pub const MAX: u8 = 4;

    /// Point value of this rating
    pub fn points(&self) -> u8 {
        match self {
            Rating::NotAtAll => 0,
            Rating::Somewhat => 1,
            Rating::Moderately => 2,
            Rating::ALot => 3,
            Rating::Extremely => 4,
        }
    }

    /// Rating for a point value, if the value is on the scale
    pub fn from_points(points: u8) -> Option<Self> {
        Self::ALL.get(usize::from(points)).copied()
    }

    /// Label shown next to the point value
    pub fn label(&self) -> &'static str {
        match self {
            Rating::NotAtAll => "Not At All",
            Rating::Somewhat => "Somewhat",
            Rating::Moderately => "Moderately",
            Rating::ALot => "A Lot",
            Rating::Extremely => "Extremely",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.points(), self.label())
    }
}
