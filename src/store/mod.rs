//! Load/save boundary to the persisted journal file.
//!
//! The on-disk format is a single JSON object with two parallel arrays:
//! `{"date": ["YYYY-MM-DD", ...], "score": [7, ...]}`. The whole file is
//! rewritten on every mutation; there is no append path.

use crate::core::journal::{Journal, ScoreEntry};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Serde image of the journal file. Both fields default so that a JSON
/// object without a recognizable `date` field loads as an empty journal
/// instead of failing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JournalFile {
    #[serde(default)]
    pub date: Vec<String>,
    #[serde(default)]
    pub score: Vec<i32>,
}

pub struct Store;

impl Store {
    /// Read the journal file if present.
    ///
    /// Missing file, empty file, and JSON without a `date` field all load
    /// as an empty journal. Malformed JSON, parallel arrays of different
    /// lengths, and date strings that do not parse as `%Y-%m-%d` are fatal.
    pub fn load(path: &str) -> AppResult<Journal> {
        let content = match fs::read_to_string(Path::new(path)) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Journal::new()),
            Err(e) => return Err(AppError::from(e)),
        };

        if content.trim().is_empty() {
            return Ok(Journal::new());
        }

        let raw: JournalFile = serde_json::from_str(&content)?;

        if raw.date.is_empty() {
            return Ok(Journal::new());
        }

        if raw.date.len() != raw.score.len() {
            return Err(AppError::JournalFile(format!(
                "date and score arrays differ in length ({} vs {})",
                raw.date.len(),
                raw.score.len()
            )));
        }

        let mut entries = Vec::with_capacity(raw.date.len());
        for (d, s) in raw.date.iter().zip(raw.score.iter()) {
            let date = NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(d.clone()))?;
            entries.push(ScoreEntry::new(date, *s));
        }

        Ok(Journal::from_entries(entries))
    }

    /// Overwrite the journal file with the full mapping, ascending by date.
    pub fn save(path: &str, journal: &Journal) -> AppResult<()> {
        let entries = journal.as_ascending();

        let raw = JournalFile {
            date: entries.iter().map(|e| e.date_str()).collect(),
            score: entries.iter().map(|e| e.score).collect(),
        };

        let json = serde_json::to_string_pretty(&raw)?;
        fs::write(Path::new(path), json)?;
        Ok(())
    }
}
