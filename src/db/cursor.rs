//! Forward-only result cursor.

use super::DbError;
use super::value::DatabaseValue;

/// A single-pass reader over the rows of one result set.
///
/// Field accessors describe the row the last successful `advance` moved to.
/// The cursor cannot be rewound.
pub trait Cursor {
    /// Move to the next row. Returns `Ok(false)` once the result set is exhausted.
    fn advance(&mut self) -> Result<bool, DbError>;

    /// Number of fields in the current row (0 before the first row).
    fn field_count(&self) -> usize;

    /// Name of the field at `index`, in result-set order.
    fn field_name(&self, index: usize) -> Option<&str>;

    /// Value of the field at `index` in the current row.
    fn field_value(&self, index: usize) -> Option<&dyn DatabaseValue>;
}
