// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text table and header rendering for CLI output.
//!
//! Renders rows in the order they were added; callers own any ordering.
//! Output is ASCII-grid style, suitable for piping.

/// A left-aligned ASCII grid table.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers, rendered as given.
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table to a string with a trailing newline.
    pub fn render(&self) -> String {
        let cols = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().take(cols).enumerate() {
                widths[i] = widths[i].max(cell_width(cell));
            }
        }

        let mut out = String::new();
        let rule = Self::rule(&widths);

        out.push_str(&rule);
        out.push_str(&Self::line(&self.headers, &widths));
        out.push_str(&rule);
        for row in &self.rows {
            out.push_str(&Self::line(row, &widths));
        }
        out.push_str(&rule);
        out
    }

    fn rule(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for w in widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line.push('\n');
        line
    }

    fn line(cells: &[String], widths: &[usize]) -> String {
        let mut out = String::from("|");
        for (i, &width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell_width(cell));
            out.push_str(&format!(" {cell}{} |", " ".repeat(pad)));
        }
        out.push('\n');
        out
    }
}

/// Width of a cell in characters, not bytes.
fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

/// A dash-ruled header block around a title line.
pub fn make_header(text: &str) -> String {
    let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let rule = "-".repeat(width);
    format!("{rule}\n{text}\n{rule}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_grid_with_padded_cells() {
        let mut table = Table::new(&["Name", "Namespace"]);
        table.add_row(vec!["http-get".to_string(), "generic".to_string()]);
        table.add_row(vec!["rps".to_string(), "generic".to_string()]);

        let expected = "\
+----------+-----------+
| Name     | Namespace |
+----------+-----------+
| http-get | generic   |
| rps      | generic   |
+----------+-----------+
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn column_grows_to_widest_cell() {
        let mut table = Table::new(&["N"]);
        table.add_row(vec!["a-very-long-name".to_string()]);
        let rendered = table.render();
        assert!(rendered.contains("| a-very-long-name |"));
        assert!(rendered.contains("| N                |"));
    }

    #[test]
    fn empty_table_renders_headers_only() {
        let table = Table::new(&["Name", "Title"]);
        let rendered = table.render();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("| Name | Title |"));
    }

    #[test]
    fn short_rows_render_empty_cells() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(vec!["x".to_string()]);
        let rendered = table.render();
        assert!(rendered.contains("| x | "));
    }

    #[test]
    fn rows_keep_insertion_order() {
        let mut table = Table::new(&["Name"]);
        table.add_row(vec!["zebra".to_string()]);
        table.add_row(vec!["alpha".to_string()]);
        let rendered = table.render();
        let zebra = rendered.find("zebra").unwrap();
        let alpha = rendered.find("alpha").unwrap();
        assert!(zebra < alpha);
    }

    #[test]
    fn make_header_wraps_title_in_rules() {
        assert_eq!(make_header("Title"), "-----\nTitle\n-----");
    }

    #[test]
    fn make_header_sizes_to_longest_line() {
        let header = make_header("ab\nlonger line");
        let rule = "-".repeat("longer line".len());
        assert_eq!(header, format!("{rule}\nab\nlonger line\n{rule}"));
    }
}
