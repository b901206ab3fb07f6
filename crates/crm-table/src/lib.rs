//! # crm-table
//!
//! A generic, presentation-free data table. Given typed rows and column
//! definitions it derives the searched, filtered, sorted and paginated
//! view, renders it to display strings, dispatches row actions to
//! callbacks, and exports the current view as CSV.
//!
//! No network or rendering happens here; the output is a render model.

pub mod cell;
pub mod column;
pub mod export;
pub mod query;
pub mod row;
pub mod rows;
pub mod table;

pub use cell::CellValue;
pub use column::{Column, RenderFn};
pub use export::{CSV_MIME_TYPE, CsvExport, export_csv};
pub use query::{
    PageSize, ShowingRange, SortState, TableQuery, TableView, derive_view, filter_rows, paginate,
    sort_rows,
};
pub use row::TableRow;
pub use table::{DataTable, HeaderCell, RenderedPage, RenderedRow, RowAction, RowActions, TableRender};
