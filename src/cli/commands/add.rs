use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::controller::ViewController;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{hint, success};
use crate::ui::view;

/// Log one brew and print the refreshed list. The three measurements are
/// numbers by the time we get here: clap parses the positionals as f64 and
/// no further range validation applies.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Add {
        weight,
        time,
        grind,
    } = cmd
    {
        //
        // 1. Open the store
        //
        let mut store = SqliteStore::open(&cfg.database)?;

        //
        // 2. Submit through the controller, then show the reloaded list
        //
        let id = {
            let mut controller = ViewController::new(&mut store, clock, cfg.load_error_policy());
            controller.initialize()?;
            controller.change_window(cfg.window());

            match controller.submit(*weight, *time, *grind) {
                Ok(id) => {
                    success(format!("Brew #{} logged.", id));
                    let filtered = controller.filtered();
                    let (total, _) = controller.totals();
                    view::print_view(&filtered, controller.active_window(), total, clock.now());
                    id
                }
                // The brew reached the store even though the reload failed:
                // the error already names its id, pass it through as is.
                Err(e @ AppError::ResyncFailed { .. }) => return Err(e),
                Err(e) => {
                    // The list was already resynchronized by submit();
                    // nothing the user typed is lost, say so explicitly.
                    hint(format!(
                        "Entered values kept: weight {} g, time {} s, grind {} s",
                        weight, time, grind
                    ));
                    return Err(AppError::SubmitFailed(e.to_string()));
                }
            }
        };

        //
        // 3. Audit trail (non-blocking)
        //
        if let Err(e) = store.audit(
            "add",
            &format!("brew #{}", id),
            &format!("weight {} g, time {} s, grind {} s", weight, time, grind),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
