//! Integration tests for burns-store
//!
//! These tests cover the record/query cycle, range semantics and ordering
//! against real SQLite databases, both in memory and on disk.

use burns_domain::{
    Checklist, ChecklistError, Clock, ManualClock, RecordedAt, Score, SessionStore, SeverityBand,
    SystemClock, TrendRange,
};
use burns_store::{SqliteSessionStore, StoreError};
use rusqlite::{params, Connection};

fn at(day: u32, hour: u32, min: u32, sec: u32) -> RecordedAt {
    RecordedAt::from_ymd_hms(2024, 4, day, hour, min, sec).unwrap()
}

fn score(value: i64) -> Score {
    Score::new(value).unwrap()
}

fn memory_store(clock: &ManualClock) -> SqliteSessionStore<ManualClock> {
    let store = SqliteSessionStore::in_memory().unwrap().with_clock(clock.clone());
    store.initialize().unwrap();
    store
}

#[test]
fn test_initialize_is_idempotent() {
    let store = SqliteSessionStore::in_memory().unwrap();
    store.initialize().unwrap();
    store.initialize().unwrap();
    store.initialize().unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_record_before_initialize_fails() {
    let mut store = SqliteSessionStore::in_memory().unwrap();
    let result = store.record(score(10));
    assert!(matches!(result, Err(StoreError::Database(_))));
}

#[test]
fn test_record_round_trip() {
    let mut store = SqliteSessionStore::in_memory().unwrap();
    store.initialize().unwrap();

    let before = SystemClock.now();
    let id = store.record(score(42)).unwrap();
    let after = SystemClock.now();

    let all = store.query_all().unwrap();
    let matching: Vec<_> = all.iter().filter(|r| r.id == id).collect();
    assert_eq!(matching.len(), 1);

    let record = matching[0];
    assert_eq!(record.score.value(), 42);
    assert_eq!(record.band, SeverityBand::Moderate);
    assert_eq!(record.band.label(), "Moderate depression");
    assert!(record.recorded_at >= before, "recorded before the call started");
    assert!(record.recorded_at <= after, "recorded after the call returned");
}

#[test]
fn test_ids_strictly_increase() {
    let clock = ManualClock::new(at(1, 9, 0, 0));
    let mut store = memory_store(&clock);

    let first = store.record(score(1)).unwrap();
    let second = store.record(score(2)).unwrap();
    let third = store.record(score(3)).unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_query_all_newest_first() {
    let clock = ManualClock::new(at(1, 9, 0, 0));
    let mut store = memory_store(&clock);

    let t1 = store.record(score(10)).unwrap();
    clock.set(at(2, 9, 0, 0));
    let t2 = store.record(score(20)).unwrap();
    clock.set(at(3, 9, 0, 0));
    let t3 = store.record(score(30)).unwrap();

    let ids: Vec<_> = store.query_all().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![t3, t2, t1]);
}

#[test]
fn test_same_second_ties_broken_by_id() {
    let clock = ManualClock::new(at(5, 12, 0, 0));
    let mut store = memory_store(&clock);

    let a = store.record(score(5)).unwrap();
    let b = store.record(score(6)).unwrap();
    let c = store.record(score(7)).unwrap();

    let records = store.query_all().unwrap();
    let ids: Vec<_> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![c, b, a]);
    assert!(records.iter().all(|r| r.recorded_at == at(5, 12, 0, 0)));
}

#[test]
fn test_query_range_is_inclusive() {
    let clock = ManualClock::new(at(1, 0, 0, 0));
    let mut store = memory_store(&clock);

    for day in 1..=5 {
        clock.set(at(day, 8, 0, 0));
        store.record(score(i64::from(day) * 10)).unwrap();
    }

    let records = store.query_range(at(2, 8, 0, 0), at(4, 8, 0, 0)).unwrap();
    let scores: Vec<u8> = records.iter().map(|r| r.score.value()).collect();
    assert_eq!(scores, vec![40, 30, 20]);

    // One second short on either side excludes the boundary sessions.
    let records = store.query_range(at(2, 8, 0, 1), at(4, 7, 59, 59)).unwrap();
    let scores: Vec<u8> = records.iter().map(|r| r.score.value()).collect();
    assert_eq!(scores, vec![30]);
}

#[test]
fn test_query_range_single_instant() {
    let clock = ManualClock::new(at(10, 10, 10, 10));
    let mut store = memory_store(&clock);
    store.record(score(33)).unwrap();

    let hits = store.query_range(at(10, 10, 10, 10), at(10, 10, 10, 10)).unwrap();
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_inverted_range_is_empty() {
    let clock = ManualClock::new(at(3, 0, 0, 0));
    let mut store = memory_store(&clock);
    store.record(score(15)).unwrap();

    let records = store.query_range(at(4, 0, 0, 0), at(2, 0, 0, 0)).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_split_ranges_cover_everything_with_overlap() {
    let clock = ManualClock::new(at(1, 0, 0, 0));
    let mut store = memory_store(&clock);

    for hour in [1, 2, 3, 3, 4] {
        clock.set(at(1, hour, 0, 0));
        store.record(score(i64::from(hour))).unwrap();
    }

    let split = at(1, 3, 0, 0);
    let lower = store.query_range(RecordedAt::earliest(), split).unwrap();
    let upper = store.query_range(split, at(30, 23, 59, 59)).unwrap();
    let all = store.query_all().unwrap();

    for record in &all {
        assert!(lower.contains(record) || upper.contains(record));
    }
    let in_both: Vec<_> = lower.iter().filter(|r| upper.contains(r)).collect();
    assert_eq!(in_both.len(), 2);
    assert!(in_both.iter().all(|r| r.recorded_at == split));
    assert_eq!(lower.len() + upper.len(), all.len() + in_both.len());
}

#[test]
fn test_file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("burns_checklist.db");

    let clock = ManualClock::new(at(7, 7, 7, 7));
    {
        let mut store = SqliteSessionStore::open(&path).unwrap().with_clock(clock.clone());
        store.initialize().unwrap();
        store.record(score(77)).unwrap();
    }

    let store = SqliteSessionStore::open(&path).unwrap();
    store.initialize().unwrap();
    let records = store.query_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].score.value(), 77);
    assert_eq!(records[0].band, SeverityBand::Extreme);
    assert_eq!(records[0].recorded_at, at(7, 7, 7, 7));
    assert_eq!(store.path(), Some(path.as_path()));
}

#[test]
fn test_stored_format_matches_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("burns_checklist.db");

    let clock = ManualClock::new(at(9, 14, 3, 9));
    let mut store = SqliteSessionStore::open(&path).unwrap().with_clock(clock);
    store.initialize().unwrap();
    store.record(score(8)).unwrap();

    let conn = Connection::open(&path).unwrap();
    let (level, timestamp): (String, String) = conn
        .query_row(
            "SELECT depression_level, timestamp FROM checklist_entries",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(level, "Normal but unhappy");
    assert_eq!(timestamp, "2024-04-09 14:03:09");
}

#[test]
fn test_rows_written_by_other_tools_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("burns_checklist.db");

    let store = SqliteSessionStore::open(&path).unwrap();
    store.initialize().unwrap();

    let conn = Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO checklist_entries (score, depression_level, timestamp) VALUES (?1, ?2, ?3)",
        params![12, "Mild depression", "2023-11-02 18:45:00"],
    )
    .unwrap();

    let records = store.query_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].band, SeverityBand::Mild);
    assert_eq!(records[0].recorded_at.to_string(), "2023-11-02 18:45:00");
}

#[test]
fn test_invalid_score_rows_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("burns_checklist.db");

    let store = SqliteSessionStore::open(&path).unwrap();
    store.initialize().unwrap();

    let conn = Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO checklist_entries (score, depression_level, timestamp) VALUES (?1, ?2, ?3)",
        params![140, "Invalid score", "2023-11-02 18:45:00"],
    )
    .unwrap();

    let err = store.query_all().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
    assert!(err.to_string().starts_with("Invalid data: Entry 1:"));
}

#[test]
fn test_mismatched_band_rows_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("burns_checklist.db");

    let store = SqliteSessionStore::open(&path).unwrap();
    store.initialize().unwrap();

    let conn = Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO checklist_entries (score, depression_level, timestamp) VALUES (?1, ?2, ?3)",
        params![90, "No Depression", "2023-11-02 18:45:00"],
    )
    .unwrap();

    let err = store.query_all().unwrap_err();
    assert!(err.to_string().contains("does not match score 90"));
}

#[test]
fn test_unopenable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nested").join("burns.db");
    assert!(matches!(
        SqliteSessionStore::open(&path),
        Err(StoreError::Database(_))
    ));
}

#[test]
fn test_checklist_end_to_end() {
    let clock = ManualClock::new(at(20, 21, 0, 0));
    let store = SqliteSessionStore::in_memory().unwrap().with_clock(clock.clone());
    let mut checklist = Checklist::new(store, clock.clone());
    checklist.initialize().unwrap();

    let calm = checklist.submit_responses(&[0; 25]).unwrap();
    assert_eq!(calm.score.value(), 0);
    assert_eq!(calm.band.label(), "No Depression");

    clock.advance_secs(86_400);
    let severe = checklist.submit_responses(&[4; 25]).unwrap();
    assert_eq!(severe.score.value(), 100);
    assert_eq!(severe.band.label(), "Extreme depression");

    let history = checklist.history().unwrap();
    assert_eq!(history.iter().map(|r| r.id).collect::<Vec<_>>(), vec![severe.id, calm.id]);

    let trend = checklist.fetch_trend(TrendRange::AllTime).unwrap();
    let scores: Vec<u8> = trend.iter().map(|p| p.score.value()).collect();
    assert_eq!(scores, vec![0, 100]);

    let err = checklist.submit_responses(&[5; 25]).unwrap_err();
    assert!(matches!(err, ChecklistError::Score(_)));
    assert_eq!(checklist.store().count().unwrap(), 2);
}

#[test]
fn test_checklist_surfaces_persistence_errors() {
    let store = SqliteSessionStore::in_memory().unwrap();
    let mut checklist = Checklist::with_system_clock(store);

    // Schema never initialized: the insert itself fails.
    let err = checklist.submit_responses(&[1; 25]).unwrap_err();
    assert!(matches!(err, ChecklistError::Persistence(StoreError::Database(_))));
}
