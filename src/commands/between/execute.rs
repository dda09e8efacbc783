use std::error::Error;

use chrono::Datelike;
use serde::Serialize;

use super::BetweenCmd;
use crate::commands::{Execute, RunContext};
use crate::dates::day_between;

/// Result of the between command execution
#[derive(Debug, Clone, Serialize)]
pub struct BetweenResult {
    pub low: u32,
    pub high: u32,
    pub date: String,
    pub day: u32,
    pub between: bool,
}

impl Execute for BetweenCmd {
    type Output = BetweenResult;

    fn execute(self, _ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let date = self.date.resolve();
        Ok(BetweenResult {
            low: self.low,
            high: self.high,
            date: date.to_string(),
            day: date.day(),
            between: day_between(self.low, self.high, &date),
        })
    }
}
