//! Output formatting for log command results.

use crate::output::Outputable;
use super::execute::{LogResult, ShowLogResult};

impl Outputable for LogResult {
    fn to_table(&self) -> String {
        format!("Logged to {}", self.path)
    }
}

impl Outputable for ShowLogResult {
    fn to_table(&self) -> String {
        self.lines.join("\n")
    }
}
