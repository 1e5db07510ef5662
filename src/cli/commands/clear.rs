use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::oplog;
use crate::store::Store;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut journal = Store::load(&cfg.journal)?;

        if journal.is_empty() {
            info("The journal is already empty.");
            return Ok(());
        }

        let count = journal.len();
        let prompt = format!(
            "Delete ALL {} saved scores? This action is irreversible.",
            count
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        journal.clear();
        Store::save(&cfg.journal, &journal)?;

        if let Err(e) = oplog::append(
            &cfg.journal,
            "clear",
            "",
            &format!("{} entries removed", count),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success("All scores have been cleared.");
    }

    Ok(())
}
