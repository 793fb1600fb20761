//! Command implementations.

pub mod history;
pub mod questions;
pub mod submit;
pub mod take;
pub mod trend;

pub use self::history::execute_history;
pub use self::questions::execute_questions;
pub use self::submit::execute_submit;
pub use self::take::execute_take;
pub use self::trend::execute_trend;
