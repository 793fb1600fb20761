//! Submit command implementation.

use crate::cli::SubmitArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::SqliteChecklist;
use tracing::debug;

/// Execute the submit command.
pub fn execute_submit(
    args: SubmitArgs,
    checklist: &mut SqliteChecklist,
    formatter: &Formatter,
) -> Result<()> {
    let responses = parse_responses(&args.responses)?;
    debug!(count = responses.len(), "submitting responses");

    let submission = checklist.submit_responses(&responses)?;
    println!("{}", formatter.format_submission(&submission)?);

    Ok(())
}

/// Parse ratings given as separate arguments, comma lists, or a mix.
///
/// Only integer syntax is checked here; count and range are the scorer's job.
fn parse_responses(args: &[String]) -> Result<Vec<i64>> {
    args.iter()
        .flat_map(|arg| arg.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                CliError::InvalidInput(format!("'{}' is not an integer rating", token))
            })
        })
        .collect()
}
