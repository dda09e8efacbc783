//! Lightweight statement classification by leading keyword.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Other,
}

impl StatementKind {
    /// Classify a statement from its first keyword (case-insensitive).
    pub fn classify(statement: &str) -> Self {
        let keyword = statement
            .trim_start_matches(|c: char| c.is_whitespace() || c == '(')
            .split(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match keyword.as_str() {
            "select" | "with" | "show" | "describe" | "desc" | "explain" => Self::Select,
            "insert" | "replace" => Self::Insert,
            "update" => Self::Update,
            "delete" => Self::Delete,
            _ => Self::Other,
        }
    }

    pub fn is_mutation(self) -> bool {
        matches!(self, Self::Insert | Self::Update | Self::Delete)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
