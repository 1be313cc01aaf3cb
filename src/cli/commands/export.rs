use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::window::Window;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        window,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // No --window means "export everything", unlike the list view
        // whose default window comes from the config.
        ExportLogic::export(
            &mut pool,
            format,
            file,
            window.unwrap_or(Window::All),
            clock.now(),
            *force,
        )?;
    }
    Ok(())
}
