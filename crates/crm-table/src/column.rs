//! Column definitions.

use std::fmt;
use std::sync::Arc;

use crate::cell::CellValue;

/// Custom cell renderer receiving the raw value and the whole row.
pub type RenderFn<R> = Arc<dyn Fn(&CellValue, &R) -> String + Send + Sync>;

/// One column of a table.
///
/// Columns are sortable and filterable unless switched off. A column that
/// is not filterable is also excluded from free-text search.
pub struct Column<R> {
    pub key: String,
    pub header: String,
    pub sortable: bool,
    pub filterable: bool,
    /// CSS-style width hint, passed through to the render model.
    pub width: Option<String>,
    render: Option<RenderFn<R>>,
}

impl<R> Column<R> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: true,
            filterable: true,
            width: None,
            render: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &R) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Whether free-text search looks at this column.
    pub fn searchable(&self) -> bool {
        self.filterable
    }

    /// Display string for this column of `row`.
    pub fn render_cell(&self, value: &CellValue, row: &R) -> String {
        match &self.render {
            Some(render) => render(value, row),
            None => value.display(),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            width: self.width.clone(),
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("width", &self.width)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}
