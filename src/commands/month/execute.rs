use std::error::Error;

use serde::Serialize;

use super::{NextMonthCmd, PreviousMonthCmd};
use crate::commands::{Execute, RunContext};
use crate::dates::{next_month, previous_month};

/// Result of the previous-month and next-month commands
#[derive(Debug, Clone, Serialize)]
pub struct MonthResult {
    pub direction: String,
    pub date: String,
    pub month: String,
}

impl Execute for PreviousMonthCmd {
    type Output = MonthResult;

    fn execute(self, _ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let date = self.date.resolve();
        Ok(MonthResult {
            direction: "previous".to_string(),
            date: date.to_string(),
            month: previous_month(&date),
        })
    }
}

impl Execute for NextMonthCmd {
    type Output = MonthResult;

    fn execute(self, _ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let date = self.date.resolve();
        Ok(MonthResult {
            direction: "next".to_string(),
            date: date.to_string(),
            month: next_month(&date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::DateArgs;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn on(year: i32, month: u32, day: u32) -> DateArgs {
        DateArgs {
            date: NaiveDate::from_ymd_opt(year, month, day),
        }
    }

    #[rstest]
    #[case(on(2019, 1, 8), "12")]
    #[case(on(2019, 10, 8), "09")]
    fn test_previous_month(#[case] date: DateArgs, #[case] expected: &str) {
        let result = PreviousMonthCmd { date }.execute(&RunContext::default()).unwrap();
        assert_eq!(result.month, expected);
        assert_eq!(result.direction, "previous");
    }

    #[rstest]
    #[case(on(2019, 12, 8), "01")]
    #[case(on(2019, 8, 8), "09")]
    fn test_next_month(#[case] date: DateArgs, #[case] expected: &str) {
        let result = NextMonthCmd { date }.execute(&RunContext::default()).unwrap();
        assert_eq!(result.month, expected);
        assert_eq!(result.direction, "next");
    }

    #[rstest]
    fn test_date_is_echoed() {
        let result = NextMonthCmd { date: on(2019, 3, 31) }
            .execute(&RunContext::default())
            .unwrap();
        assert_eq!(result.date, "2019-03-31");
    }

    #[rstest]
    fn test_defaults_to_today() {
        let result = PreviousMonthCmd { date: DateArgs::default() }
            .execute(&RunContext::default())
            .unwrap();
        assert_eq!(result.month, crate::dates::previous_month_today());
    }
}
