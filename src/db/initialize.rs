use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the full schema on a fresh (or already initialized) database.
/// Every statement is idempotent, re-running `init` is safe.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS brews (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            extraction_weight REAL NOT NULL,
            extraction_time   REAL NOT NULL,
            grind_time        REAL NOT NULL,
            timestamp         TEXT NOT NULL,
            shift             TEXT NOT NULL CHECK (shift IN ('AM', 'PM', 'Night'))
        );

        CREATE INDEX IF NOT EXISTS idx_brews_timestamp ON brews (timestamp);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT NOT NULL,
            message   TEXT NOT NULL
        );",
    )?;

    Ok(())
}
