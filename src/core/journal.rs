use chrono::NaiveDate;
use serde::Serialize;

/// A single journal row: one score for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub date: NaiveDate, // unique key, "YYYY-MM-DD" on disk
    pub score: i32,      // 1..=10 at the CLI boundary
}

impl ScoreEntry {
    pub fn new(date: NaiveDate, score: i32) -> Self {
        Self { date, score }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// In-memory journal: at most one entry per date, kept sorted ascending.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<ScoreEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a journal from loaded entries, restoring the ascending order.
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        Self { entries }
    }

    /// Update the score if the date already exists, append otherwise.
    /// The journal is re-sorted afterwards, so there is always at most one
    /// entry per date and `as_ascending` stays cheap.
    pub fn upsert(&mut self, date: NaiveDate, score: i32) {
        match self.entries.iter_mut().find(|e| e.date == date) {
            Some(existing) => existing.score = score,
            None => self.entries.push(ScoreEntry::new(date, score)),
        }
        self.entries.sort_by_key(|e| e.date);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, date: NaiveDate) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.date == date)
            .map(|e| e.score)
    }

    /// Entries oldest first, for charting and persistence.
    pub fn as_ascending(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Entries newest first, for the data table.
    pub fn as_descending(&self) -> Vec<ScoreEntry> {
        let mut out = self.entries.clone();
        out.reverse();
        out
    }

    /// Entries with `start <= date <= end`, oldest first.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Vec<ScoreEntry> {
        self.entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect()
    }
}
