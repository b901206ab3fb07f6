//! Tasks screen.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crm_entity::{TaskDetail, TaskStatus};
use crm_table::{Column, PageSize};

use super::{Listing, or_empty, short_date};
use crate::gateway::CrmGateway;
use crate::modal::ModalCoordinator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub due_today: usize,
    /// Rounded to a whole percent.
    pub completion_rate: u32,
}

impl TaskStats {
    pub fn compute(tasks: &[TaskDetail], now: DateTime<Utc>) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            match task.task.status_at(now) {
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::Overdue => stats.overdue += 1,
                TaskStatus::DueToday => stats.due_today += 1,
                TaskStatus::Open => {}
            }
        }
        stats.completion_rate = super::percent(stats.completed, stats.total).round() as u32;
        stats
    }
}

pub fn columns() -> Vec<Column<TaskDetail>> {
    vec![
        Column::new("title", "Task"),
        Column::new("dueAt", "Due Date").render(|v, _| short_date(v, "No due date")),
        Column::new("contact", "Contact"),
        Column::new("company", "Company"),
        Column::new("status", "Status"),
    ]
}

pub struct TasksPage {
    gateway: Arc<dyn CrmGateway>,
    listing: Listing<TaskDetail>,
}

impl TasksPage {
    pub fn new(gateway: Arc<dyn CrmGateway>, page_size: PageSize) -> Self {
        Self {
            gateway,
            listing: Listing::new(columns(), page_size, "tasks"),
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.listing.begin();
        let tasks = or_empty("tasks", self.gateway.list_tasks().await);
        self.listing.finish(ticket, tasks);
    }

    pub fn listing(&self) -> &Listing<TaskDetail> {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing<TaskDetail> {
        &mut self.listing
    }

    pub fn stats(&self, now: DateTime<Utc>) -> TaskStats {
        TaskStats::compute(self.listing.rows(), now)
    }

    pub fn edit(&self, row_id: &str, modals: &mut ModalCoordinator) -> bool {
        match self.listing.find(row_id) {
            Some(task) => {
                modals.open(Some(task.clone()));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::task;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_stats_follow_derived_status() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let yesterday = now - Duration::days(1);
        let tasks = vec![
            task("Overdue", Some(yesterday), None),
            task("Done late", Some(yesterday), Some(now)),
            task("Later today", Some(now + Duration::hours(3)), None),
            task("Next week", Some(now + Duration::days(7)), None),
            task("Someday", None, None),
        ];
        let stats = TaskStats::compute(&tasks, now);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.due_today, 1);
        assert_eq!(stats.completion_rate, 20);
    }

    #[test]
    fn test_no_tasks_means_zero_rate() {
        assert_eq!(TaskStats::compute(&[], Utc::now()).completion_rate, 0);
    }
}
