use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::oplog;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty (but valid) journal file
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let journal_path = if let Some(custom) = &cli.data {
        custom.clone()
    } else {
        cfg.journal.clone()
    };

    println!("⚙️  Initializing rScorelog…");
    println!("📄 Config file : {}", path.display());
    println!("🗒️  Journal    : {}", &journal_path);

    if let Err(e) = oplog::append(
        &journal_path,
        "init",
        "",
        &format!("Journal initialized at {}", &journal_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rScorelog initialization completed!");
    Ok(())
}
