//! The database session: one endpoint, scoped connections, typed results.
//!
//! `Session` is an ordinary value built by the application's composition root.
//! Callers that want the classic single shared instance use `SessionSlot`,
//! whose first successful `acquire` wins and whose later calls ignore their
//! parameters.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::DbError;
use super::backend::{Connection, DatabaseBackend};
use super::mysql_backend::MySqlBackend;
use super::params::ConnectionParams;
use super::report::StatusReport;
use super::statement::StatementKind;
use super::table::{ResultTable, materialize};
use crate::log_sink::LogSink;

/// When connections are opened and closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionPolicy {
    /// Open before every operation and close right after it.
    #[default]
    PerOperation,
    /// Keep the connection open between operations until `invalidate`
    /// or a failure.
    Reuse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub policy: ConnectionPolicy,
    pub connect_timeout: Option<Duration>,
}

pub struct Session {
    params: ConnectionParams,
    policy: ConnectionPolicy,
    backend: Box<dyn DatabaseBackend>,
    held: Mutex<Option<Box<dyn Connection>>>,
    diagnostics: Option<LogSink>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("params", &self.params)
            .field("policy", &self.policy)
            .field("backend", &self.backend.backend_name())
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(
        params: ConnectionParams,
        backend: Box<dyn DatabaseBackend>,
        policy: ConnectionPolicy,
    ) -> Self {
        Self {
            params,
            policy,
            backend,
            held: Mutex::new(None),
            diagnostics: None,
        }
    }

    /// Build a session over a MySQL endpoint.
    ///
    /// The driver options are prepared immediately; no connection is opened yet.
    pub fn connect_mysql(
        params: ConnectionParams,
        options: SessionOptions,
    ) -> Result<Self, DbError> {
        let backend = MySqlBackend::new(&params, options.connect_timeout)?;
        info!(endpoint = %backend.endpoint(), policy = ?options.policy, "Session created");
        Ok(Self::new(params, Box::new(backend), options.policy))
    }

    /// Also append failure diagnostics to a log file.
    pub fn with_diagnostics(mut self, sink: LogSink) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    pub fn diagnostics(&self) -> Option<&LogSink> {
        self.diagnostics.as_ref()
    }

    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    pub fn policy(&self) -> ConnectionPolicy {
        self.policy
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    /// True while a connection is held open between operations.
    pub fn has_open_connection(&self) -> bool {
        self.lock_held().is_some()
    }

    /// Run a read statement and materialize its rows.
    pub fn query(&self, statement: &str) -> Result<ResultTable, DbError> {
        let table = self.with_connection(|conn| {
            let mut cursor = conn.query(statement)?;
            materialize(cursor.as_mut())
        })?;

        if table.is_empty() {
            info!("0 rows returned");
        } else {
            debug!(
                rows = table.row_count(),
                columns = table.columns().len(),
                "Query returned rows"
            );
        }
        Ok(table)
    }

    /// Like `query`, but failures are logged and yield an empty table.
    ///
    /// Callers cannot tell "zero rows" from "query failed" through this entry
    /// point; use `query` to branch on errors.
    pub fn query_or_empty(&self, statement: &str) -> ResultTable {
        self.query(statement).unwrap_or_else(|e| {
            self.report_failure("Query", statement, &e);
            ResultTable::new()
        })
    }

    /// Run a mutating statement and return the affected-row count.
    pub fn execute(&self, statement: &str) -> Result<u64, DbError> {
        let affected = self.with_connection(|conn| conn.execute(statement))?;
        info!(rows_affected = affected, "Statement executed");
        Ok(affected)
    }

    /// Like `execute`, but the outcome is narrated in a `StatusReport`.
    /// No error escapes.
    pub fn execute_report(&self, statement: &str) -> StatusReport {
        match self.execute(statement) {
            Ok(affected) => {
                StatusReport::success(statement, affected, self.policy == ConnectionPolicy::Reuse)
            }
            Err(e) => {
                self.report_failure("Statement", statement, &e);
                StatusReport::failure(statement, &e)
            }
        }
    }

    pub fn insert(&self, statement: &str) -> StatusReport {
        self.execute_kind(StatementKind::Insert, statement)
    }

    pub fn update(&self, statement: &str) -> StatusReport {
        self.execute_kind(StatementKind::Update, statement)
    }

    pub fn delete(&self, statement: &str) -> StatusReport {
        self.execute_kind(StatementKind::Delete, statement)
    }

    /// Drop the held connection, if any. Dropping closes it.
    pub fn invalidate(&self) {
        if self.lock_held().take().is_some() {
            debug!("Held connection closed");
        }
    }

    fn execute_kind(&self, expected: StatementKind, statement: &str) -> StatusReport {
        let actual = StatementKind::classify(statement);
        if !actual.is_mutation() {
            warn!(expected = %expected, actual = %actual, "Not a mutating statement");
        } else if actual != expected {
            warn!(
                expected = %expected,
                actual = %actual,
                "Statement kind does not match the entry point"
            );
        }
        self.execute_report(statement)
    }

    /// Run `op` on a connection and release it on every exit path.
    ///
    /// Under `Reuse` a connection that completed `op` successfully goes back
    /// into the slot; otherwise it is dropped (closed) before returning.
    fn with_connection<T>(
        &self,
        op: impl FnOnce(&mut dyn Connection) -> Result<T, DbError>,
    ) -> Result<T, DbError> {
        let mut held = self.lock_held();

        let result = self.checkout(held.take()).and_then(|mut conn| {
            let result = op(conn.as_mut());
            if self.policy == ConnectionPolicy::Reuse && result.is_ok() {
                *held = Some(conn);
            } else {
                drop(conn);
                debug!("Connection closed");
            }
            result
        });

        if let Err(e) = &result {
            warn!(kind = ?e.kind(), error = %e, "Database operation failed");
        }
        result
    }

    /// The held connection if it still answers a ping, else a new one.
    fn checkout(&self, held: Option<Box<dyn Connection>>) -> Result<Box<dyn Connection>, DbError> {
        if let Some(mut conn) = held {
            match conn.ping() {
                Ok(()) => return Ok(conn),
                Err(e) => warn!(error = %e, "Held connection lost; reconnecting"),
            }
        }

        let conn = self.backend.connect()?;
        info!(endpoint = %self.backend.endpoint(), "Connection established");
        Ok(conn)
    }

    fn lock_held(&self) -> MutexGuard<'_, Option<Box<dyn Connection>>> {
        self.held.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn report_failure(&self, what: &str, statement: &str, e: &DbError) {
        error!(kind = ?e.kind(), error = %e, statement, "{} failed", what);

        if let Some(sink) = &self.diagnostics {
            let message = format!("{} failed on {}: {}\n  :{}", what, self.params, e, statement);
            if let Err(io_err) = sink.append(&message) {
                warn!(
                    path = %sink.path().display(),
                    error = %io_err,
                    "Failed to write diagnostic log"
                );
            }
        }
    }
}

/// First-writer-wins holder for one shared `Session`.
pub struct SessionSlot {
    cell: OnceLock<Session>,
}

impl SessionSlot {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The process-wide slot.
    pub fn global() -> &'static SessionSlot {
        static GLOBAL: SessionSlot = SessionSlot::new();
        &GLOBAL
    }

    pub fn get(&self) -> Option<&Session> {
        self.cell.get()
    }

    /// Return the shared session, building it with `init` on first use.
    ///
    /// Once a session exists, `params` are ignored. If `init` fails the slot
    /// stays empty and a later call may try again.
    pub fn acquire<F>(&self, params: ConnectionParams, init: F) -> Result<&Session, DbError>
    where
        F: FnOnce(ConnectionParams) -> Result<Session, DbError>,
    {
        if let Some(session) = self.cell.get() {
            if session.params() != &params {
                debug!(
                    requested = %params,
                    active = %session.params(),
                    "Session already acquired; ignoring new parameters"
                );
            }
            return Ok(session);
        }

        let session = init(params)?;
        Ok(self.cell.get_or_init(|| session))
    }
}

impl Default for SessionSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Acquire the process-wide MySQL session with default options.
pub fn acquire_mysql(params: ConnectionParams) -> Result<&'static Session, DbError> {
    SessionSlot::global().acquire(params, |params| {
        Session::connect_mysql(params, SessionOptions::default())
    })
}
