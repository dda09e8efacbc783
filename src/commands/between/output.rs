//! Output formatting for between command results.

use crate::output::Outputable;
use super::execute::BetweenResult;

impl Outputable for BetweenResult {
    fn to_table(&self) -> String {
        format!(
            "{} (day {}) is {}between {} and {}",
            self.date,
            self.day,
            if self.between { "" } else { "not " },
            self.low,
            self.high
        )
    }
}
