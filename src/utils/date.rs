//! Calendar helpers behind the relative "When" column and the `today`
//! window. Everything compares local calendar dates, not elapsed time:
//! a brew at 23:59 is "Yesterday" two minutes later.

use chrono::{DateTime, Local};

/// True when both instants fall on the same local calendar date.
pub fn same_calendar_day(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.date_naive() == b.date_naive()
}

/// True when `instant` falls on the local calendar date right before
/// `now`'s.
pub fn is_yesterday(instant: DateTime<Local>, now: DateTime<Local>) -> bool {
    match now.date_naive().pred_opt() {
        Some(day_before) => instant.date_naive() == day_before,
        None => false,
    }
}

/// Render an instant relative to `now`:
/// `Today 09:41`, `Yesterday 23:59`, otherwise `15/01/2024 09:41`.
pub fn format_relative(instant: DateTime<Local>, now: DateTime<Local>) -> String {
    let hm = instant.format("%H:%M");

    if same_calendar_day(instant, now) {
        format!("Today {hm}")
    } else if is_yesterday(instant, now) {
        format!("Yesterday {hm}")
    } else {
        format!("{} {hm}", instant.format("%d/%m/%Y"))
    }
}
