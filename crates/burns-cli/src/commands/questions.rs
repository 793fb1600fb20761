//! Questions command implementation.

use crate::error::Result;
use crate::output::Formatter;

/// Execute the questions command.
pub fn execute_questions(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_questions()?);
    Ok(())
}
