use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::LoadErrorPolicy;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{hint, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_config(cfg);
        }
    }

    Ok(())
}

/// Validate the config values that are free text in the file. Every
/// problem is a warning, not an error: the program runs with fallbacks.
fn check_config(cfg: &Config) {
    let mut issues = 0;

    if !Path::new(&cfg.database).exists() {
        warning(format!(
            "Database file does not exist yet: {}",
            cfg.database
        ));
        hint("Run `brewlogger init` to create it.");
        issues += 1;
    }

    match cfg.default_window.to_lowercase().as_str() {
        "today" | "week" | "all" => {}
        other => {
            warning(format!(
                "Unknown default_window '{}': the list will fall back to 'all'",
                other
            ));
            issues += 1;
        }
    }

    if LoadErrorPolicy::from_name(&cfg.on_load_error).is_none() {
        // Name the fallback by asking the same function the commands use.
        warning(format!(
            "Unknown on_load_error '{}': falling back to '{}'",
            cfg.on_load_error,
            cfg.load_error_policy().as_str()
        ));
        issues += 1;
    }

    if issues == 0 {
        success("Configuration looks good.");
    }
}
