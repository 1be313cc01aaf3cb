//! Rendering of the brew list: table, counters line, empty state.

use crate::models::brew::BrewRecord;
use crate::models::window::Window;
use crate::utils::colors::{GREY, RESET, colorize_shift};
use crate::utils::date::format_relative;
use crate::utils::formatting::fmt_measure;
use crate::utils::table::{Column, Table};
use chrono::{DateTime, Local};

/// Render the visible brews as a table, newest first.
pub fn render_brews(brews: &[BrewRecord], now: DateTime<Local>) -> String {
    let mut table = Table::new(vec![
        Column::new("When"),
        Column::new("Shift"),
        Column::new("Weight (g)"),
        Column::new("Time (s)"),
        Column::new("Grind (s)"),
    ]);

    for b in brews {
        table.add_row(vec![
            format_relative(b.timestamp, now),
            colorize_shift(b.shift),
            fmt_measure(b.extraction_weight),
            fmt_measure(b.extraction_time),
            fmt_measure(b.grind_time),
        ]);
    }

    table.render()
}

/// One line under the table telling how much of the log is visible.
pub fn counters_line(window: Window, shown: usize, total: usize) -> String {
    format!(
        "{}Window: {} | showing {} of {} brews{}",
        GREY,
        window.as_str(),
        shown,
        total,
        RESET
    )
}

fn empty_line(window: Window) -> String {
    match window {
        Window::All => "No brews logged yet.".to_string(),
        w => format!("No brews in the '{}' window.", w.as_str()),
    }
}

/// The whole list view: table (or empty state) plus counters.
pub fn print_view(filtered: &[BrewRecord], window: Window, total: usize, now: DateTime<Local>) {
    println!();
    if filtered.is_empty() {
        println!("{}", empty_line(window));
    } else {
        print!("{}", render_brews(filtered, now));
    }
    println!();
    println!("{}", counters_line(window, filtered.len(), total));
}
