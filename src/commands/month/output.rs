//! Output formatting for month command results.

use crate::output::Outputable;
use super::execute::MonthResult;

impl Outputable for MonthResult {
    /// Just the two-digit month, ready for use in names and paths.
    fn to_table(&self) -> String {
        self.month.clone()
    }
}
