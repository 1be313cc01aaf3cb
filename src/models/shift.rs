use chrono::{DateTime, Local, Timelike};
use serde::Serialize;

/// Shift a brew belongs to, derived once from the wall clock when the brew
/// is logged and stored redundantly (never recomputed on read).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Shift {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
    Night,
}

impl Shift {
    /// Classify an instant by its local hour:
    /// [7,15) → AM, [15,23) → PM, the rest ([23,24) ∪ [0,7)) → Night.
    pub fn classify(instant: DateTime<Local>) -> Self {
        match instant.hour() {
            7..=14 => Shift::Am,
            15..=22 => Shift::Pm,
            _ => Shift::Night,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Shift::Am => "AM",
            Shift::Pm => "PM",
            Shift::Night => "Night",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "AM" => Some(Shift::Am),
            "PM" => Some(Shift::Pm),
            "Night" => Some(Shift::Night),
            _ => None,
        }
    }

    /// Label shown in the table badge (same as the DB string).
    pub fn label(&self) -> &'static str {
        self.to_db_str()
    }
}
