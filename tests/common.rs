#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsl() -> Command {
    cargo_bin_cmd!("rscorelog")
}

/// Create a unique test journal path inside the system temp dir and remove
/// any existing file (plus its sibling oplog)
pub fn setup_test_journal(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rscorelog.json", name));
    let journal_path = path.to_string_lossy().to_string();
    fs::remove_file(&journal_path).ok();
    fs::remove_file(path.with_extension("oplog")).ok();
    journal_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Record a small dataset useful for many tests
pub fn seed_scores(journal_path: &str, entries: &[(&str, &str)]) {
    for (date, score) in entries {
        rsl()
            .args([
                "--data",
                journal_path,
                "--test",
                "add",
                date,
                "--score",
                score,
            ])
            .assert()
            .success();
    }
}
