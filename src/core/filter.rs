//! Window filtering over the cached brew list.

use crate::models::brew::BrewRecord;
use crate::models::window::Window;
use crate::utils::date::same_calendar_day;
use chrono::{DateTime, Duration, Local};

/// Select the brews visible in `window`, judged against `now`.
///
/// `today` matches on the local calendar date; `week` is a rolling
/// `now - 7d` comparison between instants. The asymmetry is deliberate
/// and mirrors how people ask the two questions. Input order (descending
/// by timestamp) is preserved, the input is never touched.
pub fn filter_by_window(
    records: &[BrewRecord],
    window: Window,
    now: DateTime<Local>,
) -> Vec<BrewRecord> {
    match window {
        Window::Today => records
            .iter()
            .filter(|b| same_calendar_day(b.timestamp, now))
            .cloned()
            .collect(),
        Window::Week => {
            let cutoff = now - Duration::days(7);
            records
                .iter()
                .filter(|b| b.timestamp >= cutoff)
                .cloned()
                .collect()
        }
        Window::All => records.to_vec(),
    }
}
