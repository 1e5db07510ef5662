use crate::core::journal::ScoreEntry;

/// Aggregate view over a set of entries, printed under the `list` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary {
    pub count: usize,
    pub mean: f64,
    pub min: i32,
    pub max: i32,
}

impl TrendSummary {
    pub fn compute(entries: &[ScoreEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let count = entries.len();
        let sum: i64 = entries.iter().map(|e| e.score as i64).sum();
        let min = entries.iter().map(|e| e.score).min().unwrap_or(0);
        let max = entries.iter().map(|e| e.score).max().unwrap_or(0);

        Some(Self {
            count,
            mean: sum as f64 / count as f64,
            min,
            max,
        })
    }
}
