use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::controller::ViewController;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::view;

/// Show the logged brews, narrowed to a time window.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::List { window } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;

        let mut controller = ViewController::new(&mut store, clock, cfg.load_error_policy());
        controller.initialize()?;

        // --window beats the configured default
        controller.change_window(window.unwrap_or_else(|| cfg.window()));

        let filtered = controller.filtered();
        let (total, _) = controller.totals();
        view::print_view(&filtered, controller.active_window(), total, clock.now());
    }

    Ok(())
}
