//! The trait rows implement to appear in a [`DataTable`](crate::DataTable).

use crate::cell::CellValue;

/// A record that exposes its columns by key.
pub trait TableRow {
    /// Stable identifier used to route row actions.
    fn row_id(&self) -> String;

    /// The raw value for `key`. Unknown keys are [`CellValue::Empty`].
    fn cell(&self, key: &str) -> CellValue;
}
