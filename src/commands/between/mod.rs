mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, DateArgs, Execute, RunContext};
use crate::output::{OutputFormat, Outputable};

pub use execute::BetweenResult;

/// Check whether today's (or --date's) day of month lies between two days
///
/// Both bounds are inclusive and may be given in either order.
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  mytools between 1 10                       # Is today within the first ten days?
  mytools between 10 8 --date 2019-03-09     # Bounds in any order
  mytools between 15 30 -o json")]
pub struct BetweenCmd {
    /// First bound (day of month, 1-31)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=31))]
    pub low: u32,

    /// Second bound (day of month, 1-31)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=31))]
    pub high: u32,

    #[command(flatten)]
    pub date: DateArgs,
}

impl CommandRunner for BetweenCmd {
    fn run(self, ctx: &RunContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(ctx)?;
        Ok(result.format(format))
    }
}
