//! Trend command implementation.

use crate::cli::{RangeArg, TrendArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::SqliteChecklist;
use burns_domain::{RecordedAt, TrendRange};
use chrono::NaiveDate;

/// Narrowest chart that still fits the date labels.
const MIN_WIDTH: usize = 24;

/// Execute the trend command.
pub fn execute_trend(
    args: TrendArgs,
    checklist: &SqliteChecklist,
    formatter: &Formatter,
) -> Result<()> {
    if args.width < MIN_WIDTH {
        return Err(CliError::InvalidInput(format!(
            "Chart width must be at least {}",
            MIN_WIDTH
        )));
    }

    let range = resolve_range(&args)?;
    let points = checklist.fetch_trend(range)?;

    println!("{}", formatter.format_trend(&points, args.width)?);

    Ok(())
}

/// Turn the range arguments into a trend range.
fn resolve_range(args: &TrendArgs) -> Result<TrendRange> {
    let named = match args.range {
        RangeArg::All => TrendRange::AllTime,
        RangeArg::Week => TrendRange::LastWeek,
        RangeArg::Month => TrendRange::LastMonth,
        RangeArg::Year => TrendRange::LastYear,
        RangeArg::Custom => {
            let (Some(from), Some(to)) = (&args.from, &args.to) else {
                return Err(CliError::InvalidInput(
                    "--range custom requires both --from and --to".to_string(),
                ));
            };
            return Ok(TrendRange::Custom {
                from: parse_bound(from, Bound::Start)?,
                to: parse_bound(to, Bound::End)?,
            });
        }
    };

    if args.from.is_some() || args.to.is_some() {
        return Err(CliError::InvalidInput(
            "--from and --to are only used with --range custom".to_string(),
        ));
    }
    Ok(named)
}

#[derive(Clone, Copy)]
enum Bound {
    Start,
    End,
}

/// Parse a range bound; a bare date covers the whole day.
fn parse_bound(input: &str, bound: Bound) -> Result<RecordedAt> {
    if let Ok(at) = RecordedAt::parse(input) {
        return Ok(at);
    }

    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::InvalidInput(format!(
            "'{}' is not a date (YYYY-MM-DD) or timestamp (YYYY-MM-DD HH:MM:SS)",
            input
        ))
    })?;

    let datetime = match bound {
        Bound::Start => date.and_hms_opt(0, 0, 0),
        Bound::End => date.and_hms_opt(23, 59, 59),
    };
    datetime
        .map(RecordedAt::new)
        .ok_or_else(|| CliError::InvalidInput(format!("'{}' is out of range", input)))
}
