//! Burns CLI - take the Burns Depression Checklist and track scores over time.

use burns_cli::commands;
use burns_cli::{logging, open_checklist, Cli, Command, Config, Formatter};
use clap::Parser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> burns_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    logging::init(cli.log_level(&config))?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let database = cli.db.clone().unwrap_or_else(|| config.database.clone());
    tracing::debug!(database = %database.display(), "using session database");

    match cli.command {
        Some(Command::Questions) => {
            commands::execute_questions(&formatter)?;
        }
        None | Some(Command::Take) => {
            let mut checklist = open_checklist(&database, &config)?;
            commands::execute_take(&mut checklist, &formatter)?;
        }
        Some(Command::Submit(args)) => {
            let mut checklist = open_checklist(&database, &config)?;
            commands::execute_submit(args, &mut checklist, &formatter)?;
        }
        Some(Command::History(args)) => {
            let checklist = open_checklist(&database, &config)?;
            commands::execute_history(args, &checklist, &formatter)?;
        }
        Some(Command::Trend(args)) => {
            let checklist = open_checklist(&database, &config)?;
            commands::execute_trend(args, &checklist, &formatter)?;
        }
    }

    Ok(())
}
