mod cli_tests;
mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, DateArgs, Execute, RunContext};
use crate::output::{OutputFormat, Outputable};

pub use execute::MonthResult;

/// Print the month before today (or --date) as 01-12
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  mytools previous-month                     # 12 when run in January
  mytools previous-month --date 2019-10-08   # 09")]
pub struct PreviousMonthCmd {
    #[command(flatten)]
    pub date: DateArgs,
}

/// Print the month after today (or --date) as 01-12
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  mytools next-month                         # 01 when run in December
  mytools next-month --date 2019-08-08       # 09")]
pub struct NextMonthCmd {
    #[command(flatten)]
    pub date: DateArgs,
}

impl CommandRunner for PreviousMonthCmd {
    fn run(self, ctx: &RunContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(ctx)?;
        Ok(result.format(format))
    }
}

impl CommandRunner for NextMonthCmd {
    fn run(self, ctx: &RunContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(ctx)?;
        Ok(result.format(format))
    }
}
