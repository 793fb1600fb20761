//! Take command implementation: the interactive questionnaire.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::SqliteChecklist;
use burns_domain::{ITEM_COUNT, QUESTIONS};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// What the user typed at a rating prompt.
#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Rating(i64),
    Quit,
}

/// Execute the take command.
pub fn execute_take(checklist: &mut SqliteChecklist, formatter: &Formatter) -> Result<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Readline(format!("Failed to initialize editor: {}", e)))?;

    println!(
        "{}",
        formatter.info("Burns Depression Checklist - rate each item from 0 to 4, 'q' to quit")
    );
    println!("{}", formatter.rating_scale());
    println!();

    let responses = collect_responses(
        |prompt| match editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(CliError::Readline(e.to_string())),
        },
        formatter,
    )?;

    match responses {
        Some(values) => {
            let submission = checklist.submit_responses(&values)?;
            println!();
            println!("{}", formatter.format_submission(&submission)?);
        }
        None => println!("{}", formatter.warning("Checklist cancelled; nothing was saved.")),
    }

    Ok(())
}

/// Ask every question in order, re-asking until each answer is valid.
///
/// Returns `None` if the user quits or input ends before the last item.
pub fn collect_responses<F>(mut read_line: F, formatter: &Formatter) -> Result<Option<Vec<i64>>>
where
    F: FnMut(&str) -> Result<Option<String>>,
{
    let mut responses = Vec::with_capacity(ITEM_COUNT);

    for (i, question) in QUESTIONS.iter().enumerate() {
        let prompt = format!("[{:>2}/{}] {} (0-4): ", i + 1, ITEM_COUNT, question);
        loop {
            let Some(line) = read_line(&prompt)? else {
                return Ok(None);
            };
            match parse_answer(&line) {
                Ok(Answer::Rating(value)) => {
                    responses.push(value);
                    break;
                }
                Ok(Answer::Quit) => return Ok(None),
                Err(message) => eprintln!("{}", formatter.error(&message)),
            }
        }
    }

    Ok(Some(responses))
}

fn parse_answer(input: &str) -> std::result::Result<Answer, String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(Answer::Quit);
    }

    match input.parse::<i64>() {
        Ok(value) if (0..=4).contains(&value) => Ok(Answer::Rating(value)),
        Ok(value) => Err(format!("{} is out of range; enter a number from 0 to 4", value)),
        Err(_) if input.is_empty() => Err("Enter a number from 0 to 4".to_string()),
        Err(_) => Err(format!("'{}' is not a number; enter 0 to 4", input)),
    }
}
