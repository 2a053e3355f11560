//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
    /// Wrap cells wider than this many display columns.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
            max_width: None,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
            max_width: None,
        }
    }

    pub fn wrap(mut self, width: usize) -> Self {
        self.max_width = Some(width.max(1));
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    /// Character used for the rule under the header (`separator_char` in config).
    pub fn with_separator(mut self, sep: &str) -> Self {
        self.separator = sep.chars().next().unwrap_or('-');
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Split each cell into display lines, wrapping where a column asks for it.
    fn cell_lines(&self, col: usize, value: &str) -> Vec<String> {
        match self.columns[col].max_width {
            Some(w) if UnicodeWidthStr::width(value) > w => textwrap::wrap(value, w)
                .into_iter()
                .map(|c| c.into_owned())
                .collect(),
            _ => vec![value.to_string()],
        }
    }

    pub fn render(&self) -> String {
        let ncols = self.columns.len();

        let wrapped: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| {
                (0..ncols)
                    .map(|c| self.cell_lines(c, row.get(c).map(String::as_str).unwrap_or("")))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.header.as_str()))
            .collect();
        for row in &wrapped {
            for (c, lines) in row.iter().enumerate() {
                for l in lines {
                    widths[c] = widths[c].max(UnicodeWidthStr::width(l.as_str()));
                }
            }
        }

        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| self.pad(i, &col.header, widths[i]))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * ncols.saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &wrapped {
            let height = row.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                let cells: Vec<String> = row
                    .iter()
                    .enumerate()
                    .map(|(c, lines)| {
                        self.pad(c, lines.get(line).map(String::as_str).unwrap_or(""), widths[c])
                    })
                    .collect();
                out.push_str(cells.join("  ").trim_end());
                out.push('\n');
            }
        }

        out
    }

    fn pad(&self, col: usize, s: &str, width: usize) -> String {
        match self.columns[col].align {
            Align::Left => pad_right(s, width),
            Align::Right => pad_left(s, width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_line_up() {
        let mut t = Table::new(vec![Column::left("Academy"), Column::right("Amount")]);
        t.add_row(vec!["A".into(), "500.00".into()]);
        t.add_row(vec!["Long name".into(), "1.00".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Academy    Amount");
        assert_eq!(lines[2], "A          500.00");
        assert_eq!(lines[3], "Long name    1.00");
    }

    #[test]
    fn long_cells_wrap() {
        let mut t = Table::new(vec![Column::left("Id"), Column::left("Notes").wrap(10)]);
        t.add_row(vec!["1".into(), "room four, second floor".into()]);

        let out = t.render();
        // header + rule + at least two wrapped lines
        assert!(out.lines().count() >= 4);
    }
}
