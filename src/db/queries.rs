//! All SQL touching the `brews` table.

use crate::models::brew::{BrewRecord, NewBrew};
use crate::models::shift::Shift;
use chrono::{DateTime, Local, SecondsFormat, Utc};
use rusqlite::{Connection, Row, params};

/// Map one `brews` row onto a [`BrewRecord`].
///
/// Timestamps are stored as UTC RFC 3339 text and come back as
/// `DateTime<Local>`; a row that does not parse is reported as a
/// conversion failure on the offending column.
pub fn map_row(row: &Row) -> rusqlite::Result<BrewRecord> {
    let raw_ts: String = row.get(4)?;
    let timestamp = DateTime::parse_from_rfc3339(&raw_ts)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Local);

    let raw_shift: String = row.get(5)?;
    let shift = Shift::from_db_str(&raw_shift).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            format!("unknown shift '{raw_shift}'").into(),
        )
    })?;

    Ok(BrewRecord {
        id: row.get(0)?,
        extraction_weight: row.get(1)?,
        extraction_time: row.get(2)?,
        grind_time: row.get(3)?,
        timestamp,
        shift,
    })
}

/// Insert one brew and return the id SQLite assigned to it.
pub fn insert_brew(conn: &Connection, brew: &NewBrew) -> rusqlite::Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO brews (extraction_weight, extraction_time, grind_time, timestamp, shift)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    stmt.execute(params![
        brew.extraction_weight,
        brew.extraction_time,
        brew.grind_time,
        brew.timestamp
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        brew.shift.to_db_str(),
    ])?;

    Ok(conn.last_insert_rowid())
}

/// Every stored brew, newest first. Timestamps are fixed-width UTC
/// strings, so the lexicographic ORDER BY is also chronological; ties
/// fall back to the insert order.
pub fn load_all_brews(conn: &Connection) -> rusqlite::Result<Vec<BrewRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, extraction_weight, extraction_time, grind_time, timestamp, shift
         FROM brews
         ORDER BY timestamp DESC, id DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut brews = Vec::new();
    for r in rows {
        brews.push(r?);
    }

    Ok(brews)
}
