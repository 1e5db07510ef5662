use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::info;
use crate::utils::chart;

/// Entries beyond this count are cut from the left so the chart fits a
/// normal terminal; `--period` narrows the window instead.
const MAX_POINTS: usize = 24;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { period } = cmd {
        let journal = Store::load(&cfg.journal)?;

        let entries = super::list::select_entries(&journal, period)?;

        if entries.is_empty() {
            info("No scores yet! Use 'rscorelog add' to record your first entry.");
            return Ok(());
        }

        let shown = if entries.len() > MAX_POINTS {
            info(format!(
                "Showing the last {} of {} entries (use --period to narrow the window).",
                MAX_POINTS,
                entries.len()
            ));
            &entries[entries.len() - MAX_POINTS..]
        } else {
            &entries[..]
        };

        println!("📈 Score trend [0-10]:\n");
        print!("{}", chart::render(shown));
    }
    Ok(())
}
