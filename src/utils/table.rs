//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize, // minimum; grows to fit the widest cell
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

enum Row {
    Cells(Vec<String>),
    Separator,
}

pub struct Table {
    pub columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(Row::Cells(row));
    }

    /// Insert a full-width separator line (rendered with `sep_char`).
    pub fn add_separator(&mut self) {
        self.rows.push(Row::Separator);
    }

    /// Visible width of a cell, ignoring ANSI color codes.
    fn visible_width(cell: &str) -> usize {
        strip_ansi(cell).width()
    }

    pub fn render(&self, sep_char: &str) -> String {
        // Effective widths: declared minimum, grown to header and cells.
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.width.max(c.header.width()))
            .collect();

        for row in &self.rows {
            if let Row::Cells(cells) = row {
                for (i, cell) in cells.iter().enumerate() {
                    if i < widths.len() {
                        widths[i] = widths[i].max(Self::visible_width(cell));
                    }
                }
            }
        }

        let total: usize = widths.iter().map(|w| w + 1).sum();

        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(widths.iter()) {
            out.push_str(&format!("{:<width$} ", col.header, width = *w));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            match row {
                Row::Separator => {
                    out.push_str(&sep_char.repeat(total));
                    out.push('\n');
                }
                Row::Cells(cells) => {
                    for (i, w) in widths.iter().enumerate() {
                        let cell = cells.get(i).map(String::as_str).unwrap_or("");
                        let pad = w.saturating_sub(Self::visible_width(cell));
                        out.push_str(cell);
                        out.push_str(&" ".repeat(pad + 1));
                    }
                    out.push('\n');
                }
            }
        }

        out
    }
}
