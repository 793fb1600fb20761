//! Burns Domain Layer
//!
//! This crate contains the scoring rules and domain model for the Burns
//! Depression Checklist. It performs no I/O: persistence and presentation
//! live in other crates and plug in through the traits defined here.
//!
//! ## Key Concepts
//!
//! - **Response set**: exactly 25 ratings in [0, 4], one per fixed question
//! - **Score**: the sum of a response set, always in [0, 100]
//! - **Severity band**: one of six labels covering [0, 100] without gaps
//! - **Session**: one scored administration, stamped by the store's clock
//! - **Trend range**: an explicit time window for charting past sessions
//!
//! ## Architecture
//!
//! - Pure scoring and classification logic
//! - Trait definitions for storage and time (`SessionStore`, `Clock`)
//! - A small orchestration service (`Checklist`) tying them together
//!
//! # Examples
//!
//! ```
//! use burns_domain::{score, SeverityBand};
//!
//! let total = score(&[1; 25]).unwrap();
//! assert_eq!(total.value(), 25);
//! assert_eq!(total.band(), SeverityBand::Mild);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod band;
pub mod checklist;
pub mod clock;
pub mod questionnaire;
pub mod response;
pub mod score;
pub mod session;
pub mod traits;
pub mod trend;

// Re-exports for convenience
pub use band::{classify, SeverityBand};
pub use checklist::{Checklist, ChecklistError, Submission};
pub use clock::{Clock, ManualClock, SystemClock};
pub use questionnaire::{Rating, ITEM_COUNT, QUESTIONS};
pub use response::{score, ItemResponse, ResponseSet, ScoreError};
pub use score::{DomainError, Score, MAX_SCORE};
pub use session::{RecordedAt, SessionId, SessionRecord, TIMESTAMP_FORMAT};
pub use traits::SessionStore;
pub use trend::{TrendPoint, TrendRange, TrendSummary};
