use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and its schema (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    // Config::init_all crea:
    //   ~/.brewlogger/
    //   ~/.brewlogger/brewlogger.conf
    // e ritorna il path del DB configurato.
    //
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing brewlogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_str);

    //
    // 2️⃣ CREAZIONE SCHEMA
    //
    let store = SqliteStore::create(&db_str)?;

    println!("✅ Database initialized at {}", &db_str);

    //
    // 3️⃣ LOG INTERNO (non bloccante)
    //
    if let Err(e) = store.audit(
        "init",
        &db_str,
        &format!("Database initialized at {}", &db_str),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 brewlogger initialization completed!");
    Ok(())
}
