//! MySQL backend implementation.
//!
//! Wraps the synchronous `mysql` driver. Statements go over the text protocol
//! (`query_iter` / `query_drop`), so cell values arrive as bytes and are
//! captured as UTF-8 text by the materializer.

use std::time::Duration;

use mysql::prelude::Queryable;
use mysql::{Conn, Opts, OptsBuilder, QueryResult, Row, Text};
use tracing::debug;

use super::DbError;
use super::backend::{Connection, DatabaseBackend};
use super::cursor::Cursor;
use super::params::ConnectionParams;
use super::value::DatabaseValue;

/// Prepared MySQL endpoint.
///
/// Driver options are built when the backend is created, so invalid
/// parameters fail at acquisition time rather than on the first query.
pub struct MySqlBackend {
    opts: Opts,
    endpoint: String,
}

impl MySqlBackend {
    pub fn new(
        params: &ConnectionParams,
        connect_timeout: Option<Duration>,
    ) -> Result<Self, DbError> {
        params.validate()?;
        let (host, port) = params.host_and_port()?;

        let builder = OptsBuilder::new()
            .ip_or_hostname(Some(host.clone()))
            .tcp_port(port)
            .db_name(Some(params.database.clone()).filter(|db| !db.is_empty()))
            .user(Some(params.user.clone()))
            .pass(Some(params.password.clone()))
            .tcp_connect_timeout(connect_timeout);

        Ok(Self {
            opts: Opts::from(builder),
            endpoint: format!("{}:{}/{}", host, port, params.database),
        })
    }
}

impl DatabaseBackend for MySqlBackend {
    fn backend_name(&self) -> &'static str {
        "MySQL"
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    fn connect(&self) -> Result<Box<dyn Connection>, DbError> {
        let conn = Conn::new(self.opts.clone()).map_err(|e| DbError::ConnectFailed {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })?;
        debug!(
            endpoint = %self.endpoint,
            connection_id = conn.connection_id(),
            "MySQL connection opened"
        );
        Ok(Box::new(MySqlConnection {
            conn,
            endpoint: self.endpoint.clone(),
        }))
    }
}

struct MySqlConnection {
    conn: Conn,
    endpoint: String,
}

impl Connection for MySqlConnection {
    fn query(&mut self, statement: &str) -> Result<Box<dyn Cursor + '_>, DbError> {
        let result = self
            .conn
            .query_iter(statement)
            .map_err(|e| DbError::statement(statement, e))?;
        Ok(Box::new(MySqlCursor {
            result,
            current: None,
            names: Vec::new(),
        }))
    }

    fn execute(&mut self, statement: &str) -> Result<u64, DbError> {
        self.conn
            .query_drop(statement)
            .map_err(|e| DbError::statement(statement, e))?;
        Ok(self.conn.affected_rows())
    }

    fn ping(&mut self) -> Result<(), DbError> {
        self.conn.ping().map_err(|e| DbError::ConnectFailed {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })
    }
}

/// Cursor over the first result set of a text-protocol query.
struct MySqlCursor<'a> {
    result: QueryResult<'a, 'a, 'a, Text>,
    current: Option<Row>,
    names: Vec<String>,
}

impl Cursor for MySqlCursor<'_> {
    fn advance(&mut self) -> Result<bool, DbError> {
        match self.result.next() {
            Some(Ok(row)) => {
                if self.names.is_empty() {
                    self.names = row
                        .columns_ref()
                        .iter()
                        .map(|column| column.name_str().into_owned())
                        .collect();
                }
                self.current = Some(row);
                Ok(true)
            }
            Some(Err(e)) => Err(DbError::CursorFailed {
                message: e.to_string(),
            }),
            None => {
                self.current = None;
                Ok(false)
            }
        }
    }

    fn field_count(&self) -> usize {
        self.current.as_ref().map_or(0, Row::len)
    }

    fn field_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    fn field_value(&self, index: usize) -> Option<&dyn DatabaseValue> {
        self.current
            .as_ref()?
            .as_ref(index)
            .map(|value| value as &dyn DatabaseValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_builds_endpoint_without_connecting() {
        let params = ConnectionParams::new("db.internal:3307", "shop", "alice", "s3cret");
        let backend = MySqlBackend::new(&params, None).unwrap();
        assert_eq!(backend.endpoint(), "db.internal:3307/shop");
        assert_eq!(backend.backend_name(), "MySQL");
        assert!(!backend.endpoint().contains("s3cret"));
    }

    #[rstest]
    fn test_new_rejects_invalid_params() {
        let params = ConnectionParams::new("", "shop", "alice", "s3cret");
        assert!(matches!(
            MySqlBackend::new(&params, None),
            Err(DbError::InvalidParams { .. })
        ));
    }

    #[rstest]
    fn test_connect_refused_is_connection_error() {
        // Port 1 on loopback has no listener.
        let params = ConnectionParams::new("127.0.0.1", "shop", "alice", "s3cret").with_port(1);
        let backend = MySqlBackend::new(&params, Some(Duration::from_secs(1))).unwrap();
        let error = backend.connect().err().expect("connection should be refused");
        assert_eq!(error.kind(), crate::db::ErrorKind::Connection);
    }
}
