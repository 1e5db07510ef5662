use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::journal::ScoreEntry;
use crate::core::stats::TrendSummary;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::store::Store;
use crate::ui::messages::info;
use crate::utils::colors::colorize_score;
use crate::utils::date::{describe_period, weekday_str};
use crate::utils::formatting::mean2readable;
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, asc } = cmd {
        let journal = Store::load(&cfg.journal)?;

        let entries = select_entries(&journal, period)?;

        if entries.is_empty() {
            info("No scores yet! Use 'rscorelog add' to record your first entry.");
            return Ok(());
        }

        let rows: Vec<ScoreEntry> = if *asc {
            entries.clone()
        } else {
            entries.iter().rev().cloned().collect()
        };

        println!("📅 {}:\n", describe_period(period));
        print_table(&rows, cfg);

        if let Some(summary) = TrendSummary::compute(&entries) {
            println!(
                "Entries: {} | Mean: {} | Min: {} | Max: {}",
                summary.count,
                mean2readable(summary.mean),
                summary.min,
                summary.max
            );
        }
    }
    Ok(())
}

/// Entries for the requested period, oldest first.
pub(crate) fn select_entries(
    journal: &crate::core::journal::Journal,
    period: &Option<String>,
) -> AppResult<Vec<ScoreEntry>> {
    match period {
        None => Ok(journal.as_ascending().to_vec()),
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(journal.as_ascending().to_vec()),
        Some(p) => {
            let (start, end) = parse_range(p)?;
            Ok(journal.between(start, end))
        }
    }
}

fn print_table(rows: &[ScoreEntry], cfg: &Config) {
    let mut columns = vec![Column::new("Date", 10)];
    if cfg.show_weekday {
        columns.push(Column::new("Day", 3));
    }
    columns.push(Column::new("Score", 5));

    let mut table = Table::new(columns);

    let mut prev_month: Option<(i32, u32)> = None;
    for entry in rows {
        let month = (entry.date.year(), entry.date.month());
        if let Some(prev) = prev_month
            && prev != month
        {
            table.add_separator();
        }
        prev_month = Some(month);

        let mut cells = vec![entry.date_str()];
        if cfg.show_weekday {
            cells.push(weekday_str(entry.date).to_string());
        }
        cells.push(colorize_score(entry.score));
        table.add_row(cells);
    }

    println!("{}", table.render(&cfg.separator_char));
}
