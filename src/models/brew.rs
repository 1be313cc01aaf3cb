use super::shift::Shift;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A single logged espresso brew, as read back from the store.
#[derive(Debug, Clone, Serialize)]
pub struct BrewRecord {
    pub id: i64, // ⇔ brews.id, assigned by the store on insert
    pub extraction_weight: f64, // ⇔ brews.extraction_weight (grams)
    pub extraction_time: f64,   // ⇔ brews.extraction_time (seconds)
    pub grind_time: f64,        // ⇔ brews.grind_time (seconds)
    pub timestamp: DateTime<Local>, // ⇔ brews.timestamp (TEXT, UTC RFC 3339)
    pub shift: Shift,           // ⇔ brews.shift ('AM' | 'PM' | 'Night')
}

/// A brew about to be persisted. It has no id yet: the store assigns one
/// on append. The only way to build it is [`NewBrew::logged_at`], which
/// keeps timestamp and shift consistent by construction.
#[derive(Debug, Clone)]
pub struct NewBrew {
    pub extraction_weight: f64,
    pub extraction_time: f64,
    pub grind_time: f64,
    pub timestamp: DateTime<Local>,
    pub shift: Shift,
}

impl NewBrew {
    pub fn logged_at(
        timestamp: DateTime<Local>,
        extraction_weight: f64,
        extraction_time: f64,
        grind_time: f64,
    ) -> Self {
        Self {
            extraction_weight,
            extraction_time,
            grind_time,
            timestamp,
            shift: Shift::classify(timestamp),
        }
    }
}
