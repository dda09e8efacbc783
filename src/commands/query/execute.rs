use std::error::Error;

use serde::Serialize;

use super::QueryCmd;
use crate::commands::{Execute, RunContext};
use crate::db::ResultTable;

/// Result of the query command execution
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryResult {
    pub statement: String,
    pub table: ResultTable,
}

impl Execute for QueryCmd {
    type Output = QueryResult;

    fn execute(self, ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let session = ctx.session()?;
        let table = if self.strict {
            session.query(&self.statement)?
        } else {
            session.query_or_empty(&self.statement)
        };

        Ok(QueryResult {
            statement: self.statement,
            table,
        })
    }
}
