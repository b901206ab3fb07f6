//! The data table: rows, columns, interaction state and row actions.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crm_core::types::SortDirection;

use crate::column::Column;
use crate::export::{CsvExport, export_csv};
use crate::query::{PageSize, ShowingRange, TableQuery, TableView, derive_view, filter_rows, sort_rows};
use crate::row::TableRow;

/// Callback invoked with the row an action was triggered on.
pub type ActionFn<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Per-row actions offered by a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

/// Optional view/edit/delete callbacks.
pub struct RowActions<R> {
    on_view: Option<ActionFn<R>>,
    on_edit: Option<ActionFn<R>>,
    on_delete: Option<ActionFn<R>>,
}

impl<R> Default for RowActions<R> {
    fn default() -> Self {
        Self {
            on_view: None,
            on_edit: None,
            on_delete: None,
        }
    }
}

impl<R> Clone for RowActions<R> {
    fn clone(&self) -> Self {
        Self {
            on_view: self.on_view.clone(),
            on_edit: self.on_edit.clone(),
            on_delete: self.on_delete.clone(),
        }
    }
}

impl<R> fmt::Debug for RowActions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.available()).finish()
    }
}

impl<R> RowActions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_view(mut self, f: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_view = Some(Arc::new(f));
        self
    }

    pub fn on_edit(mut self, f: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_edit = Some(Arc::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_delete = Some(Arc::new(f));
        self
    }

    /// Actions that have a callback, in display order.
    pub fn available(&self) -> Vec<RowAction> {
        [
            (RowAction::View, self.on_view.is_some()),
            (RowAction::Edit, self.on_edit.is_some()),
            (RowAction::Delete, self.on_delete.is_some()),
        ]
        .into_iter()
        .filter_map(|(action, present)| present.then_some(action))
        .collect()
    }

    fn callback(&self, action: RowAction) -> Option<&ActionFn<R>> {
        match action {
            RowAction::View => self.on_view.as_ref(),
            RowAction::Edit => self.on_edit.as_ref(),
            RowAction::Delete => self.on_delete.as_ref(),
        }
    }
}

/// Header of one column in the render model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCell {
    pub key: String,
    pub header: String,
    pub sortable: bool,
    pub filterable: bool,
    pub sort: Option<SortDirection>,
    pub width: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedRow {
    pub id: String,
    pub cells: Vec<String>,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
    pub page: usize,
    pub total_pages: usize,
    pub range: ShowingRange,
}

/// What the table shows right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum TableRender {
    /// Placeholder rows while data is loading, one per page slot.
    Loading {
        headers: Vec<HeaderCell>,
        skeleton_rows: usize,
    },
    /// Nothing to show on this page.
    Empty {
        headers: Vec<HeaderCell>,
        message: String,
    },
    Rows(RenderedPage),
}

const EMPTY_MESSAGE: &str = "No data found";

/// A table over rows of type `R`.
///
/// While `loading` is set every interaction is ignored and rendering
/// yields a skeleton.
pub struct DataTable<R> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    query: TableQuery,
    actions: RowActions<R>,
    loading: bool,
    export_name: String,
}

impl<R: fmt::Debug> fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("query", &self.query)
            .field("loading", &self.loading)
            .finish()
    }
}

impl<R: TableRow> DataTable<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            query: TableQuery::default(),
            actions: RowActions::default(),
            loading: false,
            export_name: "data".to_string(),
        }
    }

    pub fn with_actions(mut self, actions: RowActions<R>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.query = TableQuery::new(page_size);
        self
    }

    /// Base name of exported files; `.csv` is appended.
    pub fn with_export_name(mut self, name: impl Into<String>) -> Self {
        self.export_name = name.into();
        self
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the collection. Interaction state is kept.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Returns whether the change was applied.
    pub fn search(&mut self, term: impl Into<String>) -> bool {
        if self.loading {
            return false;
        }
        self.query.set_search(term);
        true
    }

    /// Set a column filter. Ignored for unknown or non-filterable columns.
    pub fn filter(&mut self, column: &str, value: impl Into<String>) -> bool {
        if self.loading || !self.column(column).is_some_and(|c| c.filterable) {
            return false;
        }
        self.query.set_filter(column, value);
        true
    }

    pub fn clear_filters(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.query.clear_filters();
        true
    }

    /// Header click. Ignored for unknown or non-sortable columns.
    pub fn toggle_sort(&mut self, column: &str) -> bool {
        if self.loading || !self.column(column).is_some_and(|c| c.sortable) {
            return false;
        }
        self.query.toggle_sort(column);
        true
    }

    pub fn set_page_size(&mut self, page_size: PageSize) -> bool {
        if self.loading {
            return false;
        }
        self.query.set_page_size(page_size);
        true
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        if self.loading {
            return false;
        }
        self.query.set_page(page);
        true
    }

    /// The current page of rows.
    pub fn view(&self) -> TableView<'_, R> {
        derive_view(&self.rows, &self.columns, &self.query)
    }

    pub fn render(&self) -> TableRender {
        let headers = self.headers();

        if self.loading {
            return TableRender::Loading {
                headers,
                skeleton_rows: self.query.page_size().get(),
            };
        }

        let view = self.view();
        if view.rows.is_empty() {
            return TableRender::Empty {
                headers,
                message: EMPTY_MESSAGE.to_string(),
            };
        }

        let actions = self.actions.available();
        let rows = view
            .rows
            .iter()
            .map(|row| RenderedRow {
                id: row.row_id(),
                cells: self
                    .columns
                    .iter()
                    .map(|c| c.render_cell(&row.cell(&c.key), row))
                    .collect(),
                actions: actions.clone(),
            })
            .collect();

        TableRender::Rows(RenderedPage {
            headers,
            rows,
            page: view.page,
            total_pages: view.total_pages,
            range: view.range,
        })
    }

    /// Run the callback for `action` on the row with `row_id`.
    ///
    /// Returns whether a callback ran.
    pub fn dispatch(&self, action: RowAction, row_id: &str) -> bool {
        if self.loading {
            return false;
        }
        let Some(callback) = self.actions.callback(action) else {
            return false;
        };
        match self.rows.iter().find(|r| r.row_id() == row_id) {
            Some(row) => {
                debug!(?action, row_id, "Row action dispatched");
                callback(row);
                true
            }
            None => false,
        }
    }

    /// CSV of every row matching the current search and filters, in the
    /// current sort order.
    pub fn export(&self) -> CsvExport {
        let mut matched = filter_rows(
            &self.rows,
            &self.columns,
            self.query.search(),
            self.query.filters(),
        );
        sort_rows(&mut matched, self.query.sort());
        export_csv(&matched, &self.columns, &self.export_name)
    }

    fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    fn headers(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|c| HeaderCell {
                key: c.key.clone(),
                header: c.header.clone(),
                sortable: c.sortable,
                filterable: c.filterable,
                sort: self.query.sort().direction_for(&c.key),
                width: c.width.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    struct Contact {
        id: u32,
        name: &'static str,
        email: Option<&'static str>,
    }

    impl TableRow for Contact {
        fn row_id(&self) -> String {
            self.id.to_string()
        }

        fn cell(&self, key: &str) -> CellValue {
            match key {
                "name" => self.name.into(),
                "email" => self.email.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn contacts(n: u32) -> Vec<Contact> {
        (1..=n)
            .map(|id| Contact {
                id,
                name: if id % 2 == 0 { "Even Person" } else { "Odd Person" },
                email: (id % 3 == 0).then_some("x@acme.com"),
            })
            .collect()
    }

    fn table() -> DataTable<Contact> {
        DataTable::new(vec![
            Column::new("name", "Name"),
            Column::new("email", "Email").render(|v, _| {
                if v.is_empty() {
                    "-".to_string()
                } else {
                    v.display()
                }
            }),
        ])
    }

    #[test]
    fn test_loading_renders_skeleton_and_blocks_interaction() {
        let mut t = table().with_page_size(PageSize::TwentyFive);
        t.set_rows(contacts(3));
        t.set_loading(true);
        assert!(!t.search("odd"));
        assert!(!t.toggle_sort("name"));
        match t.render() {
            TableRender::Loading { skeleton_rows, headers } => {
                assert_eq!(skeleton_rows, 25);
                assert_eq!(headers.len(), 2);
            }
            other => panic!("expected loading, got {other:?}"),
        }
        assert_eq!(t.query().search(), "");
    }

    #[test]
    fn test_no_matches_renders_empty_state() {
        let mut t = table();
        t.set_rows(contacts(4));
        t.search("nobody");
        assert!(matches!(t.render(), TableRender::Empty { .. }));
    }

    #[test]
    fn test_absent_values_render_empty_or_custom() {
        let mut t = DataTable::new(vec![Column::new("email", "Email")]);
        t.set_rows(contacts(1));
        let TableRender::Rows(page) = t.render() else {
            panic!("expected rows");
        };
        assert_eq!(page.rows[0].cells, vec![String::new()]);

        let mut t = table();
        t.set_rows(contacts(1));
        let TableRender::Rows(page) = t.render() else {
            panic!("expected rows");
        };
        assert_eq!(page.rows[0].cells, vec!["Odd Person".to_string(), "-".to_string()]);
    }

    #[test]
    fn test_header_reflects_sort() {
        let mut t = table();
        t.set_rows(contacts(2));
        t.toggle_sort("name");
        let TableRender::Rows(page) = t.render() else {
            panic!("expected rows");
        };
        assert_eq!(page.headers[0].sort, Some(SortDirection::Asc));
        assert_eq!(page.headers[1].sort, None);
        assert_eq!(page.rows[0].id, "2");
    }

    #[test]
    fn test_non_sortable_column_ignores_clicks() {
        let mut t = DataTable::new(vec![Column::<Contact>::new("name", "Name").sortable(false)]);
        assert!(!t.toggle_sort("name"));
        assert!(!t.toggle_sort("missing"));
    }

    #[test]
    fn test_dispatch_calls_the_matching_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut t = table().with_actions(RowActions::new().on_edit(move |c: &Contact| {
            sink.lock().unwrap().push(c.id);
        }));
        t.set_rows(contacts(5));

        assert!(t.dispatch(RowAction::Edit, "4"));
        assert!(!t.dispatch(RowAction::Delete, "4"));
        assert!(!t.dispatch(RowAction::Edit, "99"));
        assert_eq!(*seen.lock().unwrap(), vec![4]);

        let TableRender::Rows(page) = t.render() else {
            panic!("expected rows");
        };
        assert_eq!(page.rows[0].actions, vec![RowAction::Edit]);
    }

    #[test]
    fn test_export_ignores_pagination() {
        let mut t = table().with_export_name("contacts");
        t.set_rows(contacts(30));
        t.filter("name", "even");
        t.go_to_page(2);
        let csv = t.export();
        assert_eq!(csv.filename, "contacts.csv");
        assert_eq!(csv.content.lines().count(), 1 + 15);
    }

    #[test]
    fn test_render_model_serializes_with_kind_tag() {
        let mut t = table();
        t.set_loading(true);
        let loading = serde_json::to_value(t.render()).unwrap();
        assert_eq!(loading["kind"], "loading");
        assert_eq!(loading["skeletonRows"], 10);

        t.set_rows(contacts(3));
        t.set_loading(false);
        let rows = serde_json::to_value(t.render()).unwrap();
        assert_eq!(rows["kind"], "rows");
        assert_eq!(rows["rows"].as_array().unwrap().len(), 3);
    }
}
