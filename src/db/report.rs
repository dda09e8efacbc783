//! Human-readable narration of a mutating statement.

use std::fmt;

use serde::Serialize;

use super::{DbError, ErrorKind};

pub const CONNECTED: &str = "Connection established.";
pub const EXECUTED: &str = "Statement executed.";
pub const CLOSING: &str = "Closing connection...";
pub const CLOSED: &str = "Connection closed.";
pub const KEPT_OPEN: &str = "Connection kept open.";
pub const FAILED: &str = "An error occurred...";

/// Step-by-step status of one `execute_report` call.
///
/// `lines` is the narration; `rows_affected` and `error` carry the same
/// outcome in structured form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub statement: String,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_affected: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusReport {
    pub(crate) fn success(statement: &str, rows_affected: u64, kept_open: bool) -> Self {
        let mut lines = vec![
            CONNECTED.to_string(),
            EXECUTED.to_string(),
            format!("Rows affected: {}", rows_affected),
        ];
        if kept_open {
            lines.push(KEPT_OPEN.to_string());
        } else {
            lines.push(CLOSING.to_string());
            lines.push(CLOSED.to_string());
        }

        Self {
            statement: statement.to_string(),
            lines,
            rows_affected: Some(rows_affected),
            error: None,
        }
    }

    pub(crate) fn failure(statement: &str, error: &DbError) -> Self {
        let mut lines = Vec::new();
        if error.kind() == ErrorKind::Statement {
            lines.push(CONNECTED.to_string());
        }
        lines.push(FAILED.to_string());
        lines.push(error.to_string());

        Self {
            statement: statement.to_string(),
            lines,
            rows_affected: None,
            error: Some(error.to_string()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_success_narration() {
        let report = StatusReport::success("DELETE FROM t WHERE id=1", 1, false);
        assert!(report.succeeded());
        assert_eq!(
            report.to_string(),
            "Connection established.\nStatement executed.\nRows affected: 1\nClosing connection...\nConnection closed.\n"
        );
    }

    #[rstest]
    fn test_success_kept_open() {
        let report = StatusReport::success("UPDATE t SET a = 1", 3, true);
        assert_eq!(report.lines.last().map(String::as_str), Some(KEPT_OPEN));
        assert_eq!(report.rows_affected, Some(3));
    }

    #[rstest]
    fn test_statement_failure_reports_connection_first() {
        let error = DbError::statement("DELET FROM t", "syntax error");
        let report = StatusReport::failure("DELET FROM t", &error);
        assert!(!report.succeeded());
        assert_eq!(report.lines[0], CONNECTED);
        assert!(report.to_string().contains("syntax error"));
    }

    #[rstest]
    fn test_connect_failure_skips_connected_line() {
        let error = DbError::ConnectFailed {
            endpoint: "localhost:3306".into(),
            message: "Connection refused".into(),
        };
        let report = StatusReport::failure("DELETE FROM t", &error);
        assert_eq!(report.lines[0], FAILED);
        assert_eq!(report.rows_affected, None);
    }
}
