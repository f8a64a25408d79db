//! Table rendering for formatted output.

/// A simple box-drawn table.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| h.chars().count()).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table. Extra cells beyond the header count are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let row: Vec<String> = row
            .iter()
            .take(self.headers.len())
            .map(|s| s.as_ref().to_string())
            .collect();

        for (i, cell) in row.iter().enumerate() {
            self.column_widths[i] = self.column_widths[i].max(cell.chars().count());
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
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
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width - cell.chars().count();
            s.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(&["Stack", "Name"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("Stack"));
        assert!(output.contains("Name"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(&["Stack", "Name"]);
        table.add_row(&["LambdaStack", "staging-lambda-stack"]);
        table.add_row(&["CoreStack", "staging-core-stack"]);

        assert_eq!(table.row_count(), 2);
        let output = table.render();
        assert!(output.contains("staging-lambda-stack"));
        assert!(output.contains("staging-core-stack"));
    }

    #[test]
    fn rows_are_aligned() {
        let mut table = Table::new(&["Key", "Value"]);
        table.add_row(&["Environment", "preview"]);
        table.add_row(&["PR", "17"]);

        let output = table.render();
        let widths: Vec<usize> = output.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn table_handles_missing_and_extra_cells() {
        let mut table = Table::new(&["A", "B", "C"]);
        table.add_row(&["only", "two"]);
        table.add_row(&["1", "2", "3", "4"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(!output.contains('4'));
    }

    #[test]
    fn table_line_count() {
        let mut table = Table::new(&["App", "Domain", "URL"]);
        table.add_row(&["api", "api.staging.ebbo.dev", "https://api.staging.ebbo.dev"]);
        table.add_row(&["vault", "vault.staging.ebbo.dev", "https://vault.staging.ebbo.dev"]);

        // top border, header, separator, 2 rows, bottom border
        assert_eq!(table.render().lines().count(), 6);
    }
}
