//! MySQL session layer.
//!
//! This module provides the database side of the library:
//! - Connection parameters and the classic connection-string rendering
//! - A backend abstraction (`DatabaseBackend` / `Connection` / `Cursor`) so the
//!   session can run against MySQL or an in-memory scripted endpoint in tests
//! - Materialization of forward-only cursors into text-celled `ResultTable`s
//! - The `Session` itself, with scoped connection acquisition per operation
//!
//! # Type Decisions
//!
//! **Why text-only cells?**
//! Callers of this library consume result sets as display strings. Every cell
//! is converted once, at capture time, through `DatabaseValue::to_text`, so
//! numeric/date fidelity is intentionally not preserved.
//!
//! **Why a trait object for the backend?**
//! The session never needs to know which driver it talks to. Keeping the
//! endpoint behind `Box<dyn DatabaseBackend>` lets tests script results and
//! failures without a live server.

mod backend;
mod config;
mod cursor;
mod mysql_backend;
mod params;
pub mod report;
mod session;
mod statement;
mod table;
mod value;

pub use backend::{Connection, DatabaseBackend};
pub use config::DatabaseConfig;
pub use cursor::Cursor;
pub use mysql_backend::MySqlBackend;
pub use params::{ConnectionParams, DEFAULT_PORT};
pub use report::StatusReport;
pub use session::{ConnectionPolicy, Session, SessionOptions, SessionSlot, acquire_mysql};
pub use statement::StatementKind;
pub use table::{ResultTable, TableRow, materialize};
pub use value::DatabaseValue;

use thiserror::Error;

/// Coarse classification of a `DbError`, for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The endpoint could not be reached or refused the credentials.
    Connection,
    /// The statement was rejected or failed while running.
    Statement,
    /// Parameters, configuration, or cursor lifecycle problems.
    Lifecycle,
}

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid connection parameters: {message}")]
    InvalidParams { message: String },

    #[error("Failed to connect to '{endpoint}': {message}")]
    ConnectFailed { endpoint: String, message: String },

    #[error("Statement failed: {message}")]
    StatementFailed { statement: String, message: String },

    #[error("Failed to read result row: {message}")]
    CursorFailed { message: String },

    #[error("Invalid database configuration: {message}")]
    ConfigFailed { message: String },
}

impl DbError {
    pub(crate) fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    pub(crate) fn statement(statement: &str, message: impl ToString) -> Self {
        Self::StatementFailed {
            statement: statement.to_string(),
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConnectFailed { .. } => ErrorKind::Connection,
            Self::StatementFailed { .. } => ErrorKind::Statement,
            Self::InvalidParams { .. } | Self::CursorFailed { .. } | Self::ConfigFailed { .. } => {
                ErrorKind::Lifecycle
            }
        }
    }
}
