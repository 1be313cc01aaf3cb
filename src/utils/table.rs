//! Table rendering for CLI outputs.
//!
//! Cells may contain ANSI color escapes or wide glyphs, so padding is
//! computed on the visible width, not on `str::len`.

use regex::Regex;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

fn visible_width(cell: &str, ansi: &Regex) -> usize {
    UnicodeWidthStr::width(ansi.replace_all(cell, "").as_ref())
}

fn pad(cell: &str, width: usize, ansi: &Regex) -> String {
    let fill = width.saturating_sub(visible_width(cell, ansi));
    let mut out = String::from(cell);
    out.push_str(&" ".repeat(fill));
    out
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();

        // Widen each column to its largest cell first.
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|r| visible_width(&r[i], &ansi))
                    .max()
                    .unwrap_or(0)
                    .max(col.width)
            })
            .collect();

        let mut out = String::new();

        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w, &ansi));
            out.push_str("  ");
        }
        let line_w = out.trim_end().len();
        out.truncate(line_w);
        out.push('\n');

        out.push_str(&"─".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
        out.push('\n');

        for row in &self.rows {
            let mut rendered = String::new();
            for (cell, w) in row.iter().zip(&widths) {
                rendered.push_str(&pad(cell, *w, &ansi));
                rendered.push_str("  ");
            }
            while rendered.ends_with(' ') {
                rendered.pop();
            }
            out.push_str(&rendered);
            out.push('\n');
        }

        out
    }
}
