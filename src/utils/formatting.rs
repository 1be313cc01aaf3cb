//! Formatting utilities used for CLI and export outputs.

/// Format a measurement with one decimal, trimming a trailing ".0":
/// `18.5` stays "18.5", `28.0` becomes "28".
pub fn fmt_measure(value: f64) -> String {
    let s = format!("{:.1}", value);
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}
