use std::error::Error;

use serde::Serialize;
use tracing::debug;

use super::{LogCmd, ShowLogCmd};
use crate::commands::{Execute, RunContext};
use crate::log_sink::LogSink;

/// Result of the log command execution
#[derive(Debug, Clone, Serialize)]
pub struct LogResult {
    pub path: String,
    pub message: String,
}

/// Result of the show-log command execution
#[derive(Debug, Clone, Serialize)]
pub struct ShowLogResult {
    pub path: String,
    pub lines: Vec<String>,
}

impl Execute for LogCmd {
    type Output = LogResult;

    fn execute(self, ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let sink = LogSink::new(self.file.unwrap_or_else(|| ctx.log_path()));
        sink.append(&self.message)?;
        debug!(path = %sink.path().display(), "Log entry appended");

        Ok(LogResult {
            path: sink.path().display().to_string(),
            message: self.message,
        })
    }
}

impl Execute for ShowLogCmd {
    type Output = ShowLogResult;

    fn execute(self, ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let sink = LogSink::new(self.file.unwrap_or_else(|| ctx.log_path()));
        let lines = sink
            .read_lines()
            .map_err(|e| format!("Failed to read log file '{}': {}", sink.path().display(), e))?;

        Ok(ShowLogResult {
            path: sink.path().display().to_string(),
            lines,
        })
    }
}
