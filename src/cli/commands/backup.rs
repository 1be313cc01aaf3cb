use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::backup_database;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        backup_database(&cfg.database, file, *compress)?;
    }

    Ok(())
}
