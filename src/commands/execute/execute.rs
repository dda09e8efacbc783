use std::error::Error;

use serde::Serialize;

use super::{ExecuteCmd, MutationKind};
use crate::commands::{Execute, RunContext};
use crate::db::{StatementKind, StatusReport};

/// Result of the execute command execution
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecuteResult {
    pub kind: String,
    pub report: StatusReport,
}

impl Execute for ExecuteCmd {
    type Output = ExecuteResult;

    fn execute(self, ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>> {
        let session = ctx.session()?;

        let (kind, report) = match self.kind {
            Some(MutationKind::Insert) => (StatementKind::Insert, session.insert(&self.statement)),
            Some(MutationKind::Update) => (StatementKind::Update, session.update(&self.statement)),
            Some(MutationKind::Delete) => (StatementKind::Delete, session.delete(&self.statement)),
            None => (
                StatementKind::classify(&self.statement),
                session.execute_report(&self.statement),
            ),
        };

        Ok(ExecuteResult {
            kind: kind.to_string(),
            report,
        })
    }
}
