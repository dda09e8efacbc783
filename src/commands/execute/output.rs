//! Output formatting for execute command results.

use crate::output::Outputable;
use super::execute::ExecuteResult;

impl Outputable for ExecuteResult {
    fn to_table(&self) -> String {
        let mut lines = vec![
            format!("Execute ({}): {}", self.kind, self.report.statement),
            String::new(),
        ];
        lines.extend(self.report.lines.iter().cloned());
        lines.join("\n")
    }
}
