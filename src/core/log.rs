use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const OP_COLUMN_MAX: usize = 60;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "export" => Colour::Blue,
        "backup" => Colour::Purple,
        "vacuum" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

struct LogEntry {
    id: i32,
    date: String,
    operation: String,
    op_target: String,
    message: String,
}

/// Colora solo la prima parola, poi tronca sulla larghezza visibile.
fn render_op(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);

    let visible = if entry.op_target.len() > OP_COLUMN_MAX {
        let mut s = entry
            .op_target
            .chars()
            .take(OP_COLUMN_MAX - 3)
            .collect::<String>();
        s.push_str("...");
        s
    } else {
        entry.op_target.clone()
    };

    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Prints the internal audit trail, oldest entry first. `last`
    /// restricts the output to the most recent N entries.
    pub fn print_log(pool: &mut DbPool, _cfg: &Config, last: Option<usize>) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // Unica colonna op+target
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok(LogEntry {
                id,
                date,
                operation,
                op_target,
                message,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if let Some(n) = last {
            let skip = entries.len().saturating_sub(n);
            entries.drain(..skip);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| e.op_target.len())
            .max()
            .unwrap_or(10)
            .min(OP_COLUMN_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let rendered = render_op(entry);
            // padding calcolato sulla larghezza visibile, senza ANSI
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&rendered).len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                rendered,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
