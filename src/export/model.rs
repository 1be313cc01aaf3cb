// src/export/model.rs

use crate::models::brew::BrewRecord;
use serde::Serialize;

/// Struttura "piatta" per l'export dei brew.
#[derive(Serialize, Clone, Debug)]
pub struct BrewExport {
    pub id: i64,
    pub timestamp: String,
    pub shift: String,
    pub extraction_weight: f64,
    pub extraction_time: f64,
    pub grind_time: f64,
}

impl BrewExport {
    /// Timestamps are exported as local wall-clock time, absolute (the
    /// relative "Today/Yesterday" rendering stays in the list view).
    pub fn from_record(b: &BrewRecord) -> Self {
        Self {
            id: b.id,
            timestamp: b.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            shift: b.shift.to_db_str().to_string(),
            extraction_weight: b.extraction_weight,
            extraction_time: b.extraction_time,
            grind_time: b.grind_time,
        }
    }
}
