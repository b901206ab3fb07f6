//! Page controllers: one per screen of the CRM.
//!
//! Table pages own a [`Listing`] and recompute their statistics from the
//! loaded rows. A failed fetch is logged and leaves the page empty.

pub mod activities;
pub mod companies;
pub mod contacts;
pub mod dashboard;
pub mod deals;
pub mod reports;
pub mod tasks;

pub use activities::{ActivitiesPage, Activity, ActivityKind};
pub use companies::{CompaniesPage, CompanyStats};
pub use contacts::{ContactStats, ContactsPage};
pub use dashboard::{DashboardPage, DashboardStats};
pub use deals::{DealStats, DealsPage};
pub use reports::{ReportStats, ReportsPage};
pub use tasks::{TaskStats, TasksPage};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error};

use crm_core::AppResult;
use crm_table::{CellValue, Column, DataTable, PageSize, TableRow};

use crate::guard::{LoadGuard, LoadTicket};

/// How far back "recent" reaches.
pub const RECENT_DAYS: i64 = 7;

/// Start of the "recent" window ending at `now`.
pub fn recent_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(RECENT_DAYS)
}

/// `part / whole` as a percentage, 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// The rows of a fetch, or nothing if it failed.
pub(crate) fn or_empty<T>(collection: &'static str, result: AppResult<Vec<T>>) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            error!(collection, error = %e, "Failed to load collection");
            Vec::new()
        }
    }
}

/// `M/D/YYYY` for dates, `fallback` when absent.
pub(crate) fn short_date(value: &CellValue, fallback: &str) -> String {
    match value {
        CellValue::Date(d) => d.format("%-m/%-d/%Y").to_string(),
        CellValue::Empty => fallback.to_string(),
        other => other.display(),
    }
}

/// A data table plus the guard for loads into it.
#[derive(Debug)]
pub struct Listing<R> {
    table: DataTable<R>,
    guard: LoadGuard,
}

impl<R: TableRow + std::fmt::Debug> Listing<R> {
    pub fn new(columns: Vec<Column<R>>, page_size: PageSize, export_name: &str) -> Self {
        let mut table = DataTable::new(columns)
            .with_page_size(page_size)
            .with_export_name(export_name);
        table.set_loading(true);
        Self {
            table,
            guard: LoadGuard::new(),
        }
    }

    pub fn table(&self) -> &DataTable<R> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DataTable<R> {
        &mut self.table
    }

    pub fn guard(&self) -> &LoadGuard {
        &self.guard
    }

    pub fn rows(&self) -> &[R] {
        self.table.rows()
    }

    /// Mark the table loading and start a new generation.
    pub fn begin(&mut self) -> LoadTicket {
        self.table.set_loading(true);
        self.guard.begin()
    }

    /// Install `rows` unless a newer load has started since `ticket`.
    pub fn finish(&mut self, ticket: LoadTicket, rows: Vec<R>) -> bool {
        if !self.guard.is_current(ticket) {
            debug!("Discarding superseded load");
            return false;
        }
        self.table.set_rows(rows);
        self.table.set_loading(false);
        true
    }

    pub fn find(&self, row_id: &str) -> Option<&R> {
        self.rows().iter().find(|r| r.row_id() == row_id)
    }
}
