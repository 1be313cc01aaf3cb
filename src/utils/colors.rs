/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::shift::Shift;

/// Color of the shift badge in the list view.
pub fn color_for_shift(shift: Shift) -> &'static str {
    match shift {
        Shift::Am => YELLOW,
        Shift::Pm => CYAN,
        Shift::Night => MAGENTA,
    }
}

/// Colorize a shift label, ready for a table cell.
pub fn colorize_shift(shift: Shift) -> String {
    format!("{}{}{}", color_for_shift(shift), shift.label(), RESET)
}
