//! Burns CLI library.
//!
//! Configuration, logging, command execution and output formatting for the
//! `burns` command-line checklist.

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use burns_domain::{Checklist, SystemClock};
use burns_store::SqliteSessionStore;
use std::fs;
use std::path::Path;

/// Checklist backed by the SQLite session store.
pub type SqliteChecklist = Checklist<SqliteSessionStore<SystemClock>, SystemClock>;

/// Open the session database at `path` and make sure its schema exists.
pub fn open_checklist(path: &Path, config: &Config) -> Result<SqliteChecklist> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let store = SqliteSessionStore::open(path)?.with_busy_timeout(config.busy_timeout());
    let checklist = Checklist::with_system_clock(store);
    checklist.initialize()?;

    tracing::debug!(path = %path.display(), "session database ready");
    Ok(checklist)
}
