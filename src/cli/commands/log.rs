use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::oplog::LogLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        LogLogic::print(&cfg.journal)?;
    }

    Ok(())
}
