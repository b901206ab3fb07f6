//! Search, filter, sort and pagination over in-memory rows.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crm_core::types::SortDirection;

use crate::column::Column;
use crate::row::TableRow;

/// Current sort of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        column: String,
        direction: SortDirection,
    },
}

impl SortState {
    /// Next state after the header of `column` is clicked.
    ///
    /// The same column cycles ascending, descending, unsorted. Another
    /// column starts over at ascending.
    pub fn toggle(&self, column: &str) -> SortState {
        match self {
            Self::Sorted {
                column: current,
                direction,
            } if current == column => match direction {
                SortDirection::Asc => Self::Sorted {
                    column: column.to_string(),
                    direction: SortDirection::Desc,
                },
                SortDirection::Desc => Self::Unsorted,
            },
            _ => Self::Sorted {
                column: column.to_string(),
                direction: SortDirection::Asc,
            },
        }
    }

    /// Direction applied to `column`, if it is the sorted one.
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        match self {
            Self::Sorted {
                column: current,
                direction,
            } if current == column => Some(*direction),
            _ => None,
        }
    }
}

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [Self::Ten, Self::TwentyFive, Self::Fifty, Self::Hundred];

    pub fn get(&self) -> usize {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    /// The size for `n`, if `n` is one of the allowed values.
    pub fn from_usize(n: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.get() == n)
    }
}

/// Interactive state of a table: search term, filters, sort, page.
///
/// Changing the search term, any filter, or the page size returns to the
/// first page. Changing the sort keeps the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableQuery {
    search: String,
    filters: BTreeMap<String, String>,
    sort: SortState,
    page: usize,
    page_size: PageSize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl TableQuery {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: SortState::Unsorted,
            page: 1,
            page_size,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// 1-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Set the substring filter of a column. An empty value clears it.
    pub fn set_filter(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&column);
        } else {
            self.filters.insert(column, value);
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = self.sort.toggle(column);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Jump to a page. Page 0 is treated as page 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// "Showing X to Y of Z" numbers for the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowingRange {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl ShowingRange {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let start = page.saturating_sub(1).saturating_mul(page_size);
        Self {
            from: (start + 1).min(total),
            to: page.saturating_mul(page_size).min(total),
            total,
        }
    }
}

impl fmt::Display for ShowingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} results",
            self.from, self.to, self.total
        )
    }
}

/// The derived page of a table.
#[derive(Debug)]
pub struct TableView<'a, R> {
    /// Rows of the current page, in display order.
    pub rows: Vec<&'a R>,
    /// Number of rows after search and filters.
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub range: ShowingRange,
}

/// Rows matching the search term and every column filter, in input order.
pub fn filter_rows<'a, R: TableRow>(
    rows: &'a [R],
    columns: &[Column<R>],
    search: &str,
    filters: &BTreeMap<String, String>,
) -> Vec<&'a R> {
    let needle = search.to_lowercase();
    let filters: Vec<(&str, String)> = filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.as_str(), value.to_lowercase()))
        .collect();

    rows.iter()
        .filter(|row| {
            needle.is_empty()
                || columns
                    .iter()
                    .filter(|c| c.searchable())
                    .any(|c| row.cell(&c.key).display().to_lowercase().contains(&needle))
        })
        .filter(|row| {
            filters
                .iter()
                .all(|(key, value)| row.cell(key).display().to_lowercase().contains(value))
        })
        .collect()
}

/// Stable sort in place. `Unsorted` keeps the current order.
pub fn sort_rows<R: TableRow>(rows: &mut [&R], sort: &SortState) {
    if let SortState::Sorted { column, direction } = sort {
        rows.sort_by(|a, b| direction.apply(a.cell(column).compare(&b.cell(column))));
    }
}

/// The slice for a 1-based page. Out of range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if page_size == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Filter, sort and paginate `rows` according to `query`.
pub fn derive_view<'a, R: TableRow>(
    rows: &'a [R],
    columns: &[Column<R>],
    query: &TableQuery,
) -> TableView<'a, R> {
    let mut matched = filter_rows(rows, columns, query.search(), query.filters());
    sort_rows(&mut matched, query.sort());

    let size = query.page_size().get();
    let total = matched.len();
    let page_rows = paginate(&matched, query.page(), size).to_vec();

    TableView {
        rows: page_rows,
        total,
        page: query.page(),
        total_pages: total.div_ceil(size),
        range: ShowingRange::new(query.page(), size, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Deal {
        id: usize,
        title: String,
        status: &'static str,
        amount: f64,
        note: Option<&'static str>,
    }

    impl TableRow for Deal {
        fn row_id(&self) -> String {
            self.id.to_string()
        }

        fn cell(&self, key: &str) -> CellValue {
            match key {
                "title" => self.title.as_str().into(),
                "status" => self.status.into(),
                "amount" => self.amount.into(),
                "note" => self.note.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn columns() -> Vec<Column<Deal>> {
        vec![
            Column::new("title", "Title"),
            Column::new("status", "Status"),
            Column::new("amount", "Amount"),
            Column::new("note", "Note").filterable(false),
        ]
    }

    fn deal(id: usize, title: &str, status: &'static str, amount: f64) -> Deal {
        Deal {
            id,
            title: title.to_string(),
            status,
            amount,
            note: Some("internal acme memo"),
        }
    }

    fn sample() -> Vec<Deal> {
        vec![
            deal(1, "Acme renewal", "WON", 5000.0),
            deal(2, "Globex pilot", "OPEN", 1200.0),
            deal(3, "ACME expansion", "OPEN", 9000.0),
            deal(4, "Initech support", "WON", 700.0),
            deal(5, "acme training", "LOST", 300.0),
        ]
    }

    fn ids(rows: &[&Deal]) -> Vec<usize> {
        rows.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let rows = sample();
        let matched = filter_rows(&rows, &columns(), "", &BTreeMap::new());
        assert_eq!(ids(&matched), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_searchable_columns() {
        let rows = sample();
        let matched = filter_rows(&rows, &columns(), "AcMe", &BTreeMap::new());
        assert_eq!(ids(&matched), vec![1, 3, 5]);
    }

    #[test]
    fn test_non_filterable_column_is_not_searched() {
        let rows = sample();
        let matched = filter_rows(&rows, &columns(), "memo", &BTreeMap::new());
        assert!(matched.is_empty());
    }

    #[test]
    fn test_filters_and_search_combine() {
        let rows = sample();
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), "WON".to_string());
        let matched = filter_rows(&rows, &columns(), "acme", &filters);
        assert_eq!(ids(&matched), vec![1]);
        for row in matched {
            assert!(row.status.to_lowercase().contains("won"));
        }
    }

    #[test]
    fn test_empty_filter_value_is_ignored() {
        let rows = sample();
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), String::new());
        assert_eq!(filter_rows(&rows, &columns(), "", &filters).len(), 5);
    }

    #[test]
    fn test_desc_is_reverse_of_asc() {
        let rows = sample();
        let mut asc: Vec<&Deal> = rows.iter().collect();
        let mut desc = asc.clone();
        sort_rows(
            &mut asc,
            &SortState::Sorted {
                column: "amount".into(),
                direction: SortDirection::Asc,
            },
        );
        sort_rows(
            &mut desc,
            &SortState::Sorted {
                column: "amount".into(),
                direction: SortDirection::Desc,
            },
        );
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
        assert_eq!(ids(&asc), vec![5, 4, 2, 1, 3]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let rows = sample();
        let mut sorted: Vec<&Deal> = rows.iter().collect();
        sort_rows(
            &mut sorted,
            &SortState::Sorted {
                column: "status".into(),
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(ids(&sorted), vec![5, 2, 3, 1, 4]);
    }

    #[test]
    fn test_toggle_cycles_and_restores_order() {
        let mut query = TableQuery::default();
        query.toggle_sort("amount");
        assert_eq!(query.sort().direction_for("amount"), Some(SortDirection::Asc));
        query.toggle_sort("amount");
        assert_eq!(query.sort().direction_for("amount"), Some(SortDirection::Desc));
        query.toggle_sort("amount");
        assert_eq!(query.sort(), &SortState::Unsorted);

        let rows = sample();
        let view = derive_view(&rows, &columns(), &query);
        assert_eq!(ids(&view.rows), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_toggle_other_column_starts_ascending() {
        let state = SortState::Unsorted.toggle("title").toggle("title").toggle("amount");
        assert_eq!(state.direction_for("amount"), Some(SortDirection::Asc));
        assert_eq!(state.direction_for("title"), None);
    }

    #[test]
    fn test_page_resets_except_on_sort() {
        let mut query = TableQuery::default();
        query.set_page(3);
        query.toggle_sort("title");
        assert_eq!(query.page(), 3);
        query.set_search("acme");
        assert_eq!(query.page(), 1);
        query.set_page(2);
        query.set_filter("status", "won");
        assert_eq!(query.page(), 1);
        query.set_page(2);
        query.set_page_size(PageSize::Fifty);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_pages_concatenate_to_full_sequence() {
        let rows: Vec<Deal> = (1..=23)
            .map(|i| deal(i, &format!("Deal {i}"), "OPEN", i as f64))
            .collect();
        let all: Vec<&Deal> = rows.iter().collect();
        let pages = all.len().div_ceil(10);
        let joined: Vec<&Deal> = (1..=pages)
            .flat_map(|p| paginate(&all, p, 10).to_vec())
            .collect();
        assert_eq!(ids(&joined), ids(&all));
        assert!(paginate(&all, pages + 1, 10).is_empty());
    }

    #[test]
    fn test_twenty_five_rows_descending_by_amount() {
        let rows: Vec<Deal> = (1..=25)
            .map(|i| deal(i, &format!("Deal {i}"), "OPEN", (i * 100) as f64))
            .collect();
        let mut query = TableQuery::default();
        query.toggle_sort("amount");
        query.toggle_sort("amount");

        let view = derive_view(&rows, &columns(), &query);
        assert_eq!(view.total_pages, 3);
        assert_eq!(ids(&view.rows), (16..=25).rev().collect::<Vec<_>>());

        query.set_page(3);
        let view = derive_view(&rows, &columns(), &query);
        assert_eq!(ids(&view.rows), vec![5, 4, 3, 2, 1]);
        assert_eq!(view.range.to_string(), "Showing 21 to 25 of 25 results");
    }

    #[test]
    fn test_showing_range_for_empty_set() {
        let range = ShowingRange::new(1, 10, 0);
        assert_eq!((range.from, range.to), (0, 0));
    }

    #[test]
    fn test_page_size_values() {
        assert_eq!(PageSize::from_usize(25), Some(PageSize::TwentyFive));
        assert_eq!(PageSize::from_usize(20), None);
        let sizes: Vec<usize> = PageSize::ALL.iter().map(PageSize::get).collect();
        assert_eq!(sizes, vec![10, 25, 50, 100]);
    }
}
