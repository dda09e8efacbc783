mod execute;
mod output;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::commands::{CommandRunner, Execute, RunContext};
use crate::output::{OutputFormat, Outputable};

pub use execute::{LogResult, ShowLogResult};

/// Append a timestamped entry to the log file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  mytools log 'nightly export finished'
  mytools log 'import failed' --file /var/log/mytools.log")]
pub struct LogCmd {
    /// Message to record
    pub message: String,

    /// Log file (defaults to the config file's log.path, then mytools.log)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Print the log file
#[derive(Args, Debug)]
pub struct ShowLogCmd {
    /// Log file (defaults to the config file's log.path, then mytools.log)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl CommandRunner for LogCmd {
    fn run(self, ctx: &RunContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(ctx)?;
        Ok(result.format(format))
    }
}

impl CommandRunner for ShowLogCmd {
    fn run(self, ctx: &RunContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(ctx)?;
        Ok(result.format(format))
    }
}
