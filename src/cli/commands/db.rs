use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::hint;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        if !(*info || *check || *vacuum) {
            hint("Nothing to do: pass --info, --check or --vacuum.");
            return Ok(());
        }

        // One connection for however many actions were requested.
        let mut pool = DbPool::new(&cfg.database)?;

        if *info {
            stats::print_db_info(&mut pool)?;
        }

        if *check {
            run_integrity_check(&pool)?;
        }

        if *vacuum {
            run_vacuum(&pool, &cfg.database)?;
        }
    }

    Ok(())
}

fn run_integrity_check(pool: &DbPool) -> AppResult<()> {
    println!("{}▶ Running integrity check…{}", CYAN, RESET);

    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity == "ok" {
        println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
    } else {
        println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
    }

    Ok(())
}

fn run_vacuum(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!("{}▶ Running VACUUM…{}", CYAN, RESET);

    pool.conn.execute_batch("VACUUM;")?;

    println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);

    if let Err(e) = audit(&pool.conn, "vacuum", db_path, "Database optimized with VACUUM") {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    Ok(())
}
