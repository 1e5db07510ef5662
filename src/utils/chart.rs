//! ASCII line chart for the score trend.
//!
//! Fixed 11-row grid (score 10 down to 0), one fixed-width column per entry,
//! oldest first. Markers are colored by score band; the vertical span
//! between consecutive scores is filled with grey dots so the trend reads
//! as a line.

use crate::core::journal::ScoreEntry;
use crate::utils::colors::{GREY, RESET, color_for_score};
use crate::utils::formatting::pad_left;

/// Chart columns are this many characters wide.
const COL_W: usize = 7;
/// Marker position inside its column.
const MARKER_OFFSET: usize = 2;

/// Row the score is plotted on. Scores from a hand-edited file may sit
/// outside the slider range; they are clamped to the visible grid.
fn plot_row(score: i32) -> i32 {
    score.clamp(0, 10)
}

/// True when row `y` lies strictly between this entry's score and the
/// previous one, i.e. the line passes through it.
fn on_segment(entries: &[ScoreEntry], idx: usize, y: i32) -> bool {
    if idx == 0 {
        return false;
    }
    let a = plot_row(entries[idx - 1].score);
    let b = plot_row(entries[idx].score);
    y > a.min(b) && y < a.max(b)
}

pub fn render(entries: &[ScoreEntry]) -> String {
    let mut out = String::new();

    for y in (0..=10).rev() {
        let mut line = format!("{} |", pad_left(&y.to_string(), 2));

        for (i, e) in entries.iter().enumerate() {
            if plot_row(e.score) == y {
                line.push_str(&" ".repeat(MARKER_OFFSET));
                line.push_str(color_for_score(e.score));
                line.push('●');
                line.push_str(RESET);
                line.push_str(&" ".repeat(COL_W - MARKER_OFFSET - 1));
            } else if on_segment(entries, i, y) {
                line.push_str(&" ".repeat(MARKER_OFFSET));
                line.push_str(GREY);
                line.push('·');
                line.push_str(RESET);
                line.push_str(&" ".repeat(COL_W - MARKER_OFFSET - 1));
            } else {
                line.push_str(&" ".repeat(COL_W));
            }
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    // X axis and date labels (MM-DD under each column)
    out.push_str("   +");
    out.push_str(&"-".repeat(COL_W * entries.len()));
    out.push('\n');

    out.push_str("    ");
    for e in entries {
        out.push_str(&format!(
            "{:<width$}",
            e.date.format("%m-%d").to_string(),
            width = COL_W
        ));
    }
    out.push('\n');

    out
}
