/// Column alignment for [`Table`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A plain-text table for terminal output
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers, all left aligned
    pub fn new(headers: &[&str]) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            aligns: vec![Align::Left; headers.len()],
            rows: Vec::new(),
            col_widths: headers.iter().map(|h| h.chars().count()).collect(),
        }
    }

    pub fn align(mut self, column: usize, align: Align) -> Self {
        if let Some(slot) = self.aligns.get_mut(column) {
            *slot = align;
        }
        self
    }

    /// Add a row; cells past the header count are ignored
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate().take(self.col_widths.len()) {
            self.col_widths[i] = self.col_widths[i].max(cell.chars().count());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&self.headers));
        lines.push(self.render_separator());
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.join("\n")
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = self
            .col_widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                // width is in chars; ₹ is multi-byte
                let pad = width.saturating_sub(cell.chars().count());
                match self.aligns[i] {
                    Align::Left => format!("{}{}", cell, " ".repeat(pad)),
                    Align::Right => format!("{}{}", " ".repeat(pad), cell),
                }
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(&["Merchant", "Amount"]).align(1, Align::Right);
        table.add_row(vec!["Ola".to_string(), "₹10.00".to_string()]);
        table.add_row(vec!["BigBasket".to_string(), "₹1,000.00".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Merchant  |    Amount");
        assert_eq!(lines[1], "----------+----------");
        assert_eq!(lines[2], "Ola       |    ₹10.00");
        assert_eq!(lines[3], "BigBasket | ₹1,000.00");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(vec!["x".to_string()]);
        assert_eq!(table.render().lines().nth(2), Some("x |"));
    }
}
