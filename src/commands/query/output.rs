//! Output formatting for query command results.

use crate::output::{Outputable, render_grid};
use super::execute::QueryResult;

impl Outputable for QueryResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Query: {}", self.statement));
        lines.push(String::new());

        if self.table.is_empty() {
            lines.push("0 rows returned.".to_string());
            return lines.join("\n");
        }

        let rows: Vec<Vec<&str>> = self
            .table
            .rows()
            .map(|row| row.cells().iter().map(String::as_str).collect())
            .collect();
        lines.push(render_grid(self.table.columns(), &rows));
        lines.push(String::new());
        lines.push(format!("{} row(s) returned.", self.table.row_count()));

        lines.join("\n")
    }
}
