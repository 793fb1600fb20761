//! Integration tests for burns-cli
//!
//! Drive the library entry points against a database file in a temp dir.

use burns_cli::config::{Config, OutputFormat};
use burns_cli::{open_checklist, CliError, Formatter};
use burns_domain::{SeverityBand, TrendRange};
use tempfile::TempDir;

fn setup() -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    let config = Config {
        database: dir.path().join("burns_checklist.db"),
        ..Config::default()
    };
    (dir, config)
}

#[test]
fn test_open_creates_database_and_parent_dirs() {
    let (dir, config) = setup();
    let path = dir.path().join("nested").join("sessions.db");

    let checklist = open_checklist(&path, &config).unwrap();

    assert!(path.exists());
    assert!(checklist.history().unwrap().is_empty());
}

#[test]
fn test_sessions_survive_reopen() {
    let (_dir, config) = setup();

    {
        let mut checklist = open_checklist(&config.database, &config).unwrap();
        let submission = checklist.submit_responses(&[4; 25]).unwrap();
        assert_eq!(submission.score.value(), 100);
        assert_eq!(submission.band, SeverityBand::Extreme);
    }

    let checklist = open_checklist(&config.database, &config).unwrap();
    let history = checklist.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].band.label(), "Extreme depression");

    let trend = checklist.fetch_trend(TrendRange::LastWeek).unwrap();
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].score.value(), 100);
}

#[test]
fn test_invalid_submission_maps_to_score_error() {
    let (_dir, config) = setup();
    let mut checklist = open_checklist(&config.database, &config).unwrap();

    let err: CliError = checklist.submit_responses(&[1; 24]).unwrap_err().into();
    assert!(matches!(err, CliError::Score(_)));
    assert!(err.to_string().contains("expected exactly 25 responses, got 24"));
    assert!(checklist.history().unwrap().is_empty());
}

#[test]
fn test_history_json_output() {
    let (_dir, config) = setup();
    let mut checklist = open_checklist(&config.database, &config).unwrap();
    checklist.submit_responses(&[0; 25]).unwrap();
    checklist.submit_responses(&[1; 25]).unwrap();

    let formatter = Formatter::new(OutputFormat::Json, false);
    let output = formatter.format_sessions(&checklist.history().unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let sessions = value.as_array().unwrap();

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0]["score"], 25);
    assert_eq!(sessions[0]["depression_level"], "Mild depression");
    assert_eq!(sessions[1]["score"], 0);
    assert_eq!(sessions[1]["depression_level"], "No Depression");
}

#[test]
fn test_config_round_trip() {
    let (dir, config) = setup();
    let path = dir.path().join("config.toml");

    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    assert_eq!(loaded.database, config.database);
    assert_eq!(loaded.settings.format, OutputFormat::Table);
    assert_eq!(loaded.settings.log_level, "warn");
}

#[test]
fn test_malformed_config_is_reported_and_kept() {
    let (dir, _config) = setup();
    let path = dir.path().join(".burns").join("config.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let original = "database = \"/data/mood.db\"\n\n[settings]\ncolor = flase\n";
    std::fs::write(&path, original).unwrap();

    let err = Config::load_or_init(&path).unwrap_err();

    assert!(matches!(err, CliError::Toml(_)));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_missing_config_is_created_with_defaults() {
    let (dir, _config) = setup();
    let path = dir.path().join(".burns").join("config.toml");

    let config = Config::load_or_init(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap().database, config.database);
}
