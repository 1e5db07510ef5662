use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::oplog;
use crate::store::Store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let journal = Store::load(&cfg.journal)?;

        ExportLogic::export(&journal, format.clone(), file, range, *force)?;

        if let Err(e) = oplog::append(
            &cfg.journal,
            "export",
            file,
            &format!("Exported as {}", format.as_str()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
