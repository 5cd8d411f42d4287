use crate::models::{Transaction, TransactionType};

use super::format::{format_date, format_price};

/// A simple text table for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// One row per transaction, in list order
    pub fn from_transactions(transactions: &[Transaction], currency_symbol: &str) -> Self {
        let mut table = Table::new(vec!["ID", "Description", "Amount", "Category", "Date"]);
        for tx in transactions {
            let amount = match tx.kind {
                TransactionType::Income => format_price(tx.price, currency_symbol),
                TransactionType::Outcome => format!("- {}", format_price(tx.price, currency_symbol)),
            };
            table.add_row(vec![
                tx.id.to_string(),
                tx.description.clone(),
                amount,
                tx.category.clone(),
                format_date(tx),
            ]);
        }
        table
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<String>) {
        // Update column widths if needed
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.chars().count());
            }
        }

        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());

        for row in &self.rows {
            output.push('\n');
            output.push_str(&self.render_row(row));
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = row
            .iter()
            .zip(&self.col_widths)
            .map(|(col, &width)| format!("{:<width$}", col, width = width))
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["Name", "Age"]);
        table.add_row(vec!["Alice".to_string(), "30".to_string()]);
        table.add_row(vec!["Bob".to_string(), "7".to_string()]);

        assert_eq!(
            table.render(),
            "Name  | Age\n------+----\nAlice | 30\nBob   | 7"
        );
    }

    #[test]
    fn test_transactions_table() {
        let list = vec![
            Transaction {
                id: 2,
                description: "Lunch".to_string(),
                kind: TransactionType::Outcome,
                price: 20.0,
                category: "Food".to_string(),
                created_at: "2024-05-02T12:00:00.000Z".to_string(),
            },
            Transaction {
                id: 1,
                description: "Salary".to_string(),
                kind: TransactionType::Income,
                price: 5000.0,
                category: "Work".to_string(),
                created_at: "2024-05-01T09:00:00.000Z".to_string(),
            },
        ];

        let rendered = Table::from_transactions(&list, "$").render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("Lunch"));
        assert!(lines[2].contains("- $ 20.00"));
        assert!(lines[2].contains("02/05/2024"));
        assert!(lines[3].contains("$ 5,000.00"));
    }
}
