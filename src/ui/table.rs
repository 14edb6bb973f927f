//! Box-drawn tables for the check report.

/// A simple table for formatted output.
///
/// Column widths are measured in characters so repository URLs and package
/// names with non-ASCII text stay aligned.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| h.chars().count()).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table. Missing trailing cells render empty.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(self.render_border('┌', '┬', '┐'));
        lines.push(self.render_row(&self.headers));
        lines.push(self.render_border('├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.push(self.render_border('└', '┴', '┘'));

        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();

        let mid = mid.to_string();
        format!("{}{}{}", left, segments.join(mid.as_str()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let padding = width - cell.chars().count();
            s.push_str(&format!(" {}{} │", cell, " ".repeat(padding)));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["Library", "Version"]);
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("Library"));
        assert!(output.contains("Version"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(vec!["Library", "Version"]);
        table.add_row(vec!["ngx-legacy", "3.0.0"]);
        table.add_row(vec!["@acme/widgets", "1.4.0"]);

        assert_eq!(table.row_count(), 2);

        let output = table.render();
        assert!(output.contains("ngx-legacy"));
        assert!(output.contains("@acme/widgets"));
        assert!(output.contains("1.4.0"));
    }

    #[test]
    fn table_rows_have_equal_width() {
        let mut table = Table::new(vec!["A", "B"]);
        table.add_row(vec!["a-much-longer-value", "x"]);
        table.add_row(vec!["short", "ünïcödé"]);

        let output = table.render();
        let widths: Vec<usize> = output.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{output}");
    }

    #[test]
    fn table_uses_box_drawing() {
        let table = Table::new(vec!["A", "B"]);
        let output = table.render();

        for c in ['┌', '┬', '┐', '├', '┼', '┤', '└', '┴', '┘', '│', '─'] {
            assert!(output.contains(c), "missing {c}");
        }
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(vec!["only", "two"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn table_line_count() {
        let mut table = Table::new(vec!["Library", "URL", "Version"]);
        table.add_row(vec!["a", "NA", "1.0.0"]);
        table.add_row(vec!["b", "NA", "2.0.0"]);
        table.add_row(vec!["c", "NA", "3.0.0"]);

        // top border, header, separator, 3 data rows, bottom border
        assert_eq!(table.render().lines().count(), 7);
    }
}
