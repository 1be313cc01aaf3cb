use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::{DateTime, Local};
use rusqlite::OptionalExtension;
use std::fs;

fn fmt_ts(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn print_db_info(pool: &mut DbPool) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, pool.path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL BREWS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM brews", [], |row| row.get(0))?;
    println!("{}• Total brews:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 3) BREWS PER SHIFT
    //
    {
        let mut stmt = pool
            .conn
            .prepare("SELECT shift, COUNT(*) FROM brews GROUP BY shift ORDER BY COUNT(*) DESC")?;
        let shift_rows =
            stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;

        println!("{}• Brews per shift:{}", CYAN, RESET);
        for r in shift_rows {
            let (shift, n) = r?;
            println!("    {:<6} {}", shift, n);
        }
    }

    //
    // 4) DATE RANGE
    //
    let first_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM brews ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM brews ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_ts
        .as_deref()
        .map(fmt_ts)
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_ts
        .as_deref()
        .map(fmt_ts)
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 5) AVERAGE BREWS/DAY
    //
    if let (Some(f), Some(l)) = (&first_ts, &last_ts) {
        if let (Ok(d1), Ok(d2)) = (
            DateTime::parse_from_rfc3339(f),
            DateTime::parse_from_rfc3339(l),
        ) {
            let days = (d2.date_naive() - d1.date_naive()).num_days().max(1);
            let avg = count as f64 / days as f64;
            println!("{}• Average brews/day:{} {:.2}", CYAN, RESET, avg);
        }
    }

    println!();
    Ok(())
}
