mod execute;
mod output;

use std::error::Error;

use clap::{Args, ValueEnum};

use crate::commands::{CommandRunner, Execute, RunContext};
use crate::output::{OutputFormat, Outputable};

pub use execute::ExecuteResult;

/// Which mutating entry point to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MutationKind {
    Insert,
    Update,
    Delete,
}

/// Run an INSERT, UPDATE or DELETE statement and narrate the outcome
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  mytools execute \"INSERT INTO customers (name) VALUES ('alice')\"
  mytools execute \"DELETE FROM customers WHERE id = 1\" --kind delete
  mytools execute \"UPDATE orders SET paid = 1\" -o json")]
pub struct ExecuteCmd {
    /// SQL statement to run
    pub statement: String,

    /// Expected statement kind; a mismatch is logged as a warning
    #[arg(short, long, value_enum)]
    pub kind: Option<MutationKind>,
}

impl CommandRunner for ExecuteCmd {
    fn run(self, ctx: &RunContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(ctx)?;
        Ok(result.format(format))
    }
}
