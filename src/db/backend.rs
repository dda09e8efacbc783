//! Database backend traits for abstracting the endpoint.
//!
//! A backend is the prepared, not-yet-connected handle to an endpoint. Each
//! `connect` call yields a live `Connection`, which is closed when dropped.

use super::DbError;
use super::cursor::Cursor;

/// A live connection to the endpoint. Dropping it closes the connection.
pub trait Connection: Send {
    /// Run a read statement and return a cursor over its first result set.
    fn query(&mut self, statement: &str) -> Result<Box<dyn Cursor + '_>, DbError>;

    /// Run a mutating statement and return the engine-reported affected-row count.
    fn execute(&mut self, statement: &str) -> Result<u64, DbError>;

    /// Check that the server still answers on this connection.
    fn ping(&mut self) -> Result<(), DbError>;
}

/// Trait for database backends that can open connections.
pub trait DatabaseBackend: Send + Sync {
    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Endpoint description for diagnostics (never includes credentials).
    fn endpoint(&self) -> String;

    /// Open a new connection.
    fn connect(&self) -> Result<Box<dyn Connection>, DbError>;
}
