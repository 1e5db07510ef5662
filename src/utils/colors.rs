/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Score color banding:
/// 8..=10 → green
/// 4..=7 → yellow
/// below → red
pub fn color_for_score(score: i32) -> &'static str {
    if score >= 8 {
        GREEN
    } else if score >= 4 {
        YELLOW
    } else {
        RED
    }
}

/// Colored rendition of a score value for table cells.
pub fn colorize_score(score: i32) -> String {
    format!("{}{}{}", color_for_score(score), score, RESET)
}
