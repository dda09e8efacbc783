//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` impl producing a serializable result
//! - An `Outputable` impl rendering that result

mod between;
mod execute;
mod log;
mod month;
mod query;

pub use between::{BetweenCmd, BetweenResult};
pub use execute::{ExecuteCmd, ExecuteResult, MutationKind};
pub use log::{LogCmd, LogResult, ShowLogCmd, ShowLogResult};
pub use month::{MonthResult, NextMonthCmd, PreviousMonthCmd};
pub use query::{QueryCmd, QueryResult};

use std::cell::OnceCell;
use std::error::Error;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use enum_dispatch::enum_dispatch;

use crate::config::{ConfigFile, DEFAULT_LOG_FILE};
use crate::db::{DatabaseConfig, Session};
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>>;
}

/// Runs a command and returns its formatted output.
#[enum_dispatch]
pub trait CommandRunner {
    fn run(self, ctx: &RunContext, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
#[enum_dispatch(CommandRunner)]
pub enum Command {
    /// Run a SELECT statement and print the result table
    Query(QueryCmd),

    /// Run an INSERT, UPDATE or DELETE statement and print a status report
    Execute(ExecuteCmd),

    /// Print the previous month as two digits (01-12)
    PreviousMonth(PreviousMonthCmd),

    /// Print the next month as two digits (01-12)
    NextMonth(NextMonthCmd),

    /// Check whether a date's day of month lies between two days (inclusive)
    Between(BetweenCmd),

    /// Append a timestamped entry to the log file
    Log(LogCmd),

    /// Print the log file
    ShowLog(ShowLogCmd),
}

/// Everything a command may need from the environment.
///
/// The database session is built lazily, so date and log commands never
/// require database configuration.
#[derive(Debug, Default)]
pub struct RunContext {
    database_url: Option<String>,
    config: Option<ConfigFile>,
    session: OnceCell<Session>,
}

impl RunContext {
    pub fn new(database_url: Option<String>, config: Option<ConfigFile>) -> Self {
        Self {
            database_url,
            config,
            session: OnceCell::new(),
        }
    }

    /// Context with a prepared session (used by tests and embedders).
    pub fn with_session(session: Session) -> Self {
        let ctx = Self::default();
        let _ = ctx.session.set(session);
        ctx
    }

    pub fn config(&self) -> Option<&ConfigFile> {
        self.config.as_ref()
    }

    /// Log file from the config file, or `mytools.log`.
    pub fn log_path(&self) -> PathBuf {
        self.config
            .as_ref()
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), ConfigFile::log_path)
    }

    /// The session for this run, built on first use.
    pub fn session(&self) -> Result<&Session, Box<dyn Error>> {
        if let Some(session) = self.session.get() {
            return Ok(session);
        }

        let config = DatabaseConfig::resolve(self.database_url.as_deref(), self.config.as_ref())?;
        let session = match self.config.as_ref().and_then(ConfigFile::diagnostics_log) {
            Some(log) => config.connect_with_diagnostics(log)?,
            None => config.connect()?,
        };
        Ok(self.session.get_or_init(|| session))
    }
}

/// Optional `--date` shared by the date commands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DateArgs {
    /// Date to use instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

impl DateArgs {
    pub fn resolve(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected a date as YYYY-MM-DD: {}", e))
}
