//! Period/range parsing shared by `list`, `chart`, and `export`.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a period expression into inclusive date bounds.
///
/// Supported forms:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `start:end` where both sides share one of the forms above
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{r} (start and end must share the same format)"
            )));
        }

        let (s, _) = parse_bounds(start)?;
        let (_, e) = parse_bounds(end)?;
        Ok((s, e))
    } else {
        parse_bounds(r)
    }
}

/// Bounds of a single period expression.
fn parse_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d1, d2))
        }

        // YYYY-MM
        7 => {
            let (ys, ms) = p
                .split_once('-')
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let y: i32 = ys
                .parse()
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let m: u32 = ms
                .parse()
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let last = month_last_day(y, m).ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d1, d2))
        }

        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d, d))
        }

        _ => Err(AppError::InvalidPeriod(p.to_string())),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
