mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute, RunContext};
use crate::output::{OutputFormat, Outputable};

pub use execute::QueryResult;

/// Run a SELECT statement and print the resulting rows
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  mytools query 'SELECT id, name FROM customers'
  mytools query 'SELECT COUNT(*) AS n FROM orders' -o json
  mytools query 'SELECT * FROM missing' --strict   # Fail instead of printing 0 rows")]
pub struct QueryCmd {
    /// SQL statement to run
    pub statement: String,

    /// Fail on a database error instead of returning an empty table
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

impl CommandRunner for QueryCmd {
    fn run(self, ctx: &RunContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(ctx)?;
        Ok(result.format(format))
    }
}
