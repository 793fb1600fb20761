//! History command implementation.

use crate::cli::HistoryArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::SqliteChecklist;
use burns_domain::SessionStore;

/// Execute the history command.
pub fn execute_history(
    args: HistoryArgs,
    checklist: &SqliteChecklist,
    formatter: &Formatter,
) -> Result<()> {
    let mut sessions = checklist.history()?;

    // Newest first, so truncating keeps the most recent sessions
    if let Some(limit) = args.limit {
        sessions.truncate(limit.get());
    }

    println!("{}", formatter.format_sessions(&sessions)?);

    let total = checklist.store().count()?;
    if let Some(note) = formatter.truncation_note(sessions.len(), total) {
        println!("{}", note);
    }

    Ok(())
}
