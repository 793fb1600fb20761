//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the session database.
pub const DATABASE_FILE: &str = "burns_checklist.db";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Session database path
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// How long to wait on a locked database, in milliseconds
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Directory holding the config file and, by default, the database.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".burns"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from the default file, writing defaults there if it is missing.
    pub fn load() -> Result<Self> {
        Self::load_or_init(Self::path()?)
    }

    /// Load configuration from `path`; a missing file is created with defaults.
    ///
    /// An existing file is never rewritten, so a malformed one is reported
    /// instead of being replaced.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    /// Load configuration from a specific file, falling back to defaults if it is missing.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default file.
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::path()?)
    }

    /// Save configuration to a specific file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Busy timeout as a duration.
    pub fn busy_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.settings.busy_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            log_level: default_log_level(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

fn default_database() -> PathBuf {
    Config::dir()
        .map(|dir| dir.join(DATABASE_FILE))
        .unwrap_or_else(|_| PathBuf::from(DATABASE_FILE))
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_busy_timeout_ms() -> u64 {
    5000
}
