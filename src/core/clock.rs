//! Clock source abstraction.
//!
//! Every time-dependent piece of logic takes the current instant as a
//! parameter; the binary obtains that instant from a `Clock` chosen once
//! at startup. Tests (and the hidden `--now` flag) substitute a fixed one.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock: the system wall clock in the local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to one instant. Used by tests and by `--now`.
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Parse "YYYY-MM-DD HH:MM" as a local wall-clock instant.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
            .map_err(|_| AppError::InvalidTime(raw.to_string()))?;
        let instant = Local
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| AppError::InvalidTime(raw.to_string()))?;
        Ok(Self(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
