use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::oplog;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::date;

/// Add or update the score for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, score } = cmd {
        //
        // 1. Parse date (defaults to today, like the date picker)
        //
        let d = match date {
            Some(raw) => {
                date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?
            }
            None => date::today(),
        };

        //
        // 2. Resolve score (CLI value, or the configured default)
        //
        let s = score.unwrap_or(cfg.default_score);
        if !(1..=10).contains(&s) {
            return Err(AppError::InvalidScore(format!(
                "{} (must be between 1 and 10)",
                s
            )));
        }

        //
        // 3. Load, upsert, save
        //
        let mut journal = Store::load(&cfg.journal)?;
        let existed = journal.get(d).is_some();

        journal.upsert(d, s);
        Store::save(&cfg.journal, &journal)?;

        //
        // 4. Operation log (non-blocking)
        //
        let verb = if existed { "updated" } else { "recorded" };
        if let Err(e) = oplog::append(
            &cfg.journal,
            "add",
            &d.to_string(),
            &format!("Score {} {}", s, verb),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Score {} {} for {}.", s, verb, d));
    }

    Ok(())
}
