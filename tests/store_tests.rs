use chrono::NaiveDate;
use rscorelog::core::journal::Journal;
use rscorelog::errors::AppError;
use rscorelog::store::Store;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_journal(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_store_rscorelog.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

#[test]
fn round_trip_preserves_entries() {
    let path = temp_journal("round_trip");

    let mut journal = Journal::new();
    journal.upsert(d("2024-01-01"), 7);
    journal.upsert(d("2024-01-03"), 9);
    journal.upsert(d("2024-01-02"), 5);

    Store::save(&path, &journal).expect("save");
    let loaded = Store::load(&path).expect("load");

    assert_eq!(loaded.as_ascending(), journal.as_ascending());

    // save(load(save(J))) writes the same bytes again
    let first = fs::read_to_string(&path).expect("read");
    Store::save(&path, &loaded).expect("save again");
    let second = fs::read_to_string(&path).expect("read again");
    assert_eq!(first, second);
}

#[test]
fn saved_file_holds_parallel_arrays() {
    let path = temp_journal("file_shape");

    let mut journal = Journal::new();
    journal.upsert(d("2024-02-02"), 4);
    journal.upsert(d("2024-02-01"), 8);

    Store::save(&path, &journal).expect("save");

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");

    assert_eq!(raw["date"][0], "2024-02-01");
    assert_eq!(raw["date"][1], "2024-02-02");
    assert_eq!(raw["score"][0], 8);
    assert_eq!(raw["score"][1], 4);
}

#[test]
fn missing_file_loads_empty() {
    let path = temp_journal("missing_file");

    let journal = Store::load(&path).expect("load");
    assert!(journal.is_empty());
}

#[test]
fn empty_file_loads_empty() {
    let path = temp_journal("empty_file");
    fs::write(&path, "").expect("write");

    let journal = Store::load(&path).expect("load");
    assert!(journal.is_empty());
}

#[test]
fn file_without_date_field_loads_empty() {
    let path = temp_journal("no_date_field");
    fs::write(&path, r#"{"note": "not a journal"}"#).expect("write");

    let journal = Store::load(&path).expect("load");
    assert!(journal.is_empty());
}

#[test]
fn empty_arrays_load_empty() {
    let path = temp_journal("empty_arrays");
    fs::write(&path, r#"{"date": [], "score": []}"#).expect("write");

    let journal = Store::load(&path).expect("load");
    assert!(journal.is_empty());
}

#[test]
fn malformed_date_is_fatal() {
    let path = temp_journal("malformed_date");
    fs::write(&path, r#"{"date": ["2024-13-99"], "score": [5]}"#).expect("write");

    let err = Store::load(&path).expect_err("should fail");
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn unequal_arrays_are_fatal() {
    let path = temp_journal("unequal_arrays");
    fs::write(&path, r#"{"date": ["2024-01-01"], "score": []}"#).expect("write");

    let err = Store::load(&path).expect_err("should fail");
    assert!(matches!(err, AppError::JournalFile(_)));
}

#[test]
fn invalid_json_is_fatal() {
    let path = temp_journal("invalid_json");
    fs::write(&path, "definitely not json").expect("write");

    let err = Store::load(&path).expect_err("should fail");
    assert!(matches!(err, AppError::Store(_)));
}

#[test]
fn load_restores_ascending_order() {
    let path = temp_journal("unsorted_file");
    fs::write(
        &path,
        r#"{"date": ["2024-01-03", "2024-01-01", "2024-01-02"], "score": [9, 7, 5]}"#,
    )
    .expect("write");

    let journal = Store::load(&path).expect("load");
    let dates: Vec<String> = journal
        .as_ascending()
        .iter()
        .map(|e| e.date_str())
        .collect();

    assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
}

#[test]
fn cleared_journal_persists_empty_arrays() {
    let path = temp_journal("cleared");

    let mut journal = Journal::new();
    journal.upsert(d("2024-04-01"), 6);
    Store::save(&path, &journal).expect("save");

    journal.clear();
    Store::save(&path, &journal).expect("save cleared");

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");

    assert_eq!(raw["date"].as_array().map(|a| a.len()), Some(0));
    assert_eq!(raw["score"].as_array().map(|a| a.len()), Some(0));
}
