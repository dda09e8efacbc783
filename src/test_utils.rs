//! Shared test utilities: an in-memory scripted endpoint.
//!
//! `ScriptedBackend` answers statements from a fixed table of responses and
//! counts how many connections were opened and closed, so session lifecycle
//! tests can run without a MySQL server.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mysql::Value;

use crate::db::{Connection, Cursor, DatabaseBackend, DatabaseValue, DbError};

/// Cursor over rows held in memory.
pub struct ScriptedCursor {
    columns: Vec<String>,
    rows: std::vec::IntoIter<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl ScriptedCursor {
    pub fn new(columns: &[&str], rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows.into_iter(),
            current: None,
        }
    }
}

impl Cursor for ScriptedCursor {
    fn advance(&mut self) -> Result<bool, DbError> {
        self.current = self.rows.next();
        Ok(self.current.is_some())
    }

    fn field_count(&self) -> usize {
        self.current.as_ref().map_or(0, Vec::len)
    }

    fn field_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    fn field_value(&self, index: usize) -> Option<&dyn DatabaseValue> {
        self.current
            .as_ref()?
            .get(index)
            .map(|value| value as &dyn DatabaseValue)
    }
}

/// Scripted response for one statement.
#[derive(Debug, Clone)]
pub enum Scripted {
    Rows {
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    },
    Affected(u64),
    Fail(String),
}

/// Connection counters shared between a backend and its connections.
#[derive(Debug, Default)]
pub struct ConnectionStats {
    opened: AtomicUsize,
    closed: AtomicUsize,
}

impl ConnectionStats {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    responses: Arc<HashMap<String, Scripted>>,
    refuse: Option<String>,
    stats: Arc<ConnectionStats>,
    generation: Arc<AtomicUsize>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every connection attempt fails with `message`.
    pub fn refusing(message: &str) -> Self {
        Self {
            refuse: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_rows(self, statement: &str, columns: &[&str], rows: Vec<Vec<Value>>) -> Self {
        self.with(
            statement,
            Scripted::Rows {
                columns: columns.iter().map(|c| c.to_string()).collect(),
                rows,
            },
        )
    }

    pub fn with_affected(self, statement: &str, affected: u64) -> Self {
        self.with(statement, Scripted::Affected(affected))
    }

    pub fn with_failure(self, statement: &str, message: &str) -> Self {
        self.with(statement, Scripted::Fail(message.to_string()))
    }

    pub fn stats(&self) -> Arc<ConnectionStats> {
        Arc::clone(&self.stats)
    }

    /// Simulate the server closing every open connection (restart, idle
    /// timeout). Connections opened afterwards work again.
    pub fn drop_connections(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn with(mut self, statement: &str, response: Scripted) -> Self {
        Arc::make_mut(&mut self.responses).insert(statement.to_string(), response);
        self
    }
}

impl DatabaseBackend for ScriptedBackend {
    fn backend_name(&self) -> &'static str {
        "Scripted"
    }

    fn endpoint(&self) -> String {
        "scripted:0/test".to_string()
    }

    fn connect(&self) -> Result<Box<dyn Connection>, DbError> {
        if let Some(message) = &self.refuse {
            return Err(DbError::ConnectFailed {
                endpoint: self.endpoint(),
                message: message.clone(),
            });
        }
        self.stats.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedConnection {
            responses: Arc::clone(&self.responses),
            stats: Arc::clone(&self.stats),
            generation: Arc::clone(&self.generation),
            opened_in: self.generation.load(Ordering::SeqCst),
        }))
    }
}

struct ScriptedConnection {
    responses: Arc<HashMap<String, Scripted>>,
    stats: Arc<ConnectionStats>,
    generation: Arc<AtomicUsize>,
    opened_in: usize,
}

impl ScriptedConnection {
    fn is_lost(&self) -> bool {
        self.generation.load(Ordering::SeqCst) != self.opened_in
    }

    fn response(&self, statement: &str) -> Result<&Scripted, DbError> {
        if self.is_lost() {
            return Err(DbError::statement(statement, "MySQL server has gone away"));
        }
        match self.responses.get(statement) {
            Some(Scripted::Fail(message)) => Err(DbError::statement(statement, message)),
            Some(response) => Ok(response),
            None => Err(DbError::statement(statement, "no scripted response")),
        }
    }
}

impl Connection for ScriptedConnection {
    fn query(&mut self, statement: &str) -> Result<Box<dyn Cursor + '_>, DbError> {
        let cursor = match self.response(statement)? {
            Scripted::Rows { columns, rows } => {
                let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
                ScriptedCursor::new(&columns, rows.clone())
            }
            _ => ScriptedCursor::new(&[], Vec::new()),
        };
        Ok(Box::new(cursor))
    }

    fn execute(&mut self, statement: &str) -> Result<u64, DbError> {
        match self.response(statement)? {
            Scripted::Affected(affected) => Ok(*affected),
            _ => Ok(0),
        }
    }

    fn ping(&mut self) -> Result<(), DbError> {
        if self.is_lost() {
            return Err(DbError::ConnectFailed {
                endpoint: "scripted:0/test".to_string(),
                message: "MySQL server has gone away".to_string(),
            });
        }
        Ok(())
    }
}

impl Drop for ScriptedConnection {
    fn drop(&mut self) {
        self.stats.closed.fetch_add(1, Ordering::SeqCst);
    }
}
