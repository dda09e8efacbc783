//! Generic text table built from a result cursor.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use tracing::trace;

use super::DbError;
use super::cursor::Cursor;

/// Columns plus rows of text cells.
///
/// Every row has exactly one cell per column. Columns are fixed by the first
/// row of the result; an empty result has no columns and no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<TableRow<'_>> {
        self.rows.get(index).map(|cells| TableRow {
            columns: &self.columns,
            cells,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.rows.iter().map(|cells| TableRow {
            columns: &self.columns,
            cells,
        })
    }
}

/// Borrowed view of one row, addressable by position or column name.
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    columns: &'a [String],
    cells: &'a [String],
}

impl<'a> TableRow<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.cell(index)
    }

    pub fn cell(&self, index: usize) -> Option<&'a str> {
        self.cells.get(index).map(String::as_str)
    }

    pub fn cells(&self) -> &'a [String] {
        self.cells
    }

    /// `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(String::as_str))
    }
}

impl Serialize for TableRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for ResultTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<TableRow<'_>> = self.rows().collect();
        let mut table = serializer.serialize_struct("ResultTable", 2)?;
        table.serialize_field("columns", &self.columns)?;
        table.serialize_field("rows", &rows)?;
        table.end()
    }
}

/// Drain a forward-only cursor into a `ResultTable` in a single pass.
///
/// The first row read defines the columns (field names in positional order).
/// Later rows reuse them by position. Cells past the first row's field count
/// are ignored and missing cells become empty text.
pub fn materialize<C: Cursor + ?Sized>(cursor: &mut C) -> Result<ResultTable, DbError> {
    let mut table = ResultTable::new();

    while cursor.advance()? {
        if table.rows.is_empty() {
            for index in 0..cursor.field_count() {
                let name = cursor.field_name(index).unwrap_or_default().to_string();
                if let Some(value) = cursor.field_value(index) {
                    trace!(column = %name, value_type = value.type_name(), "Discovered column");
                }
                table.columns.push(name);
            }
        }

        let row = (0..table.columns.len())
            .map(|index| {
                cursor
                    .field_value(index)
                    .map(|value| value.to_text())
                    .unwrap_or_default()
            })
            .collect();
        table.rows.push(row);
    }

    Ok(table)
}
