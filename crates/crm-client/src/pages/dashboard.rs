//! Dashboard: headline numbers across every collection.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crm_entity::{Company, ContactDetail, DealDetail, TaskDetail, TaskStatus};

use super::{or_empty, percent, recent_cutoff};
use crate::gateway::CrmGateway;
use crate::guard::LoadGuard;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub contacts: usize,
    pub companies: usize,
    pub deals: usize,
    pub tasks: usize,
    pub recent_contacts: usize,
    pub recent_companies: usize,
    pub recent_deals: usize,
    pub total_value: f64,
    pub avg_deal_value: f64,
    pub completed_tasks: usize,
    pub overdue_tasks: usize,
    /// Completed tasks over all tasks, in percent.
    pub conversion_rate: f64,
}

impl DashboardStats {
    pub fn compute(
        contacts: &[ContactDetail],
        companies: &[Company],
        deals: &[DealDetail],
        tasks: &[TaskDetail],
        now: DateTime<Utc>,
    ) -> Self {
        let cutoff = recent_cutoff(now);
        let total_value: f64 = deals.iter().map(|d| d.deal.amount).sum();
        let completed_tasks = tasks.iter().filter(|t| t.task.is_completed()).count();

        Self {
            contacts: contacts.len(),
            companies: companies.len(),
            deals: deals.len(),
            tasks: tasks.len(),
            recent_contacts: contacts
                .iter()
                .filter(|c| c.contact.created_at > cutoff)
                .count(),
            recent_companies: companies.iter().filter(|c| c.created_at > cutoff).count(),
            recent_deals: deals.iter().filter(|d| d.deal.created_at > cutoff).count(),
            total_value,
            avg_deal_value: if deals.is_empty() {
                0.0
            } else {
                total_value / deals.len() as f64
            },
            completed_tasks,
            overdue_tasks: tasks
                .iter()
                .filter(|t| t.task.status_at(now) == TaskStatus::Overdue)
                .count(),
            conversion_rate: percent(completed_tasks, tasks.len()),
        }
    }
}

pub struct DashboardPage {
    gateway: Arc<dyn CrmGateway>,
    guard: LoadGuard,
    stats: DashboardStats,
    loading: bool,
}

impl DashboardPage {
    pub fn new(gateway: Arc<dyn CrmGateway>) -> Self {
        Self {
            gateway,
            guard: LoadGuard::new(),
            stats: DashboardStats::default(),
            loading: true,
        }
    }

    /// Fetch all four collections concurrently and recompute the stats.
    pub async fn load(&mut self) {
        let ticket = self.guard.begin();
        self.loading = true;

        let gateway = self.gateway.as_ref();
        let (contacts, companies, deals, tasks) = tokio::join!(
            gateway.list_contacts(),
            gateway.list_companies(),
            gateway.list_deals(),
            gateway.list_tasks(),
        );

        if !self.guard.is_current(ticket) {
            return;
        }
        self.stats = DashboardStats::compute(
            &or_empty("contacts", contacts),
            &or_empty("companies", companies),
            &or_empty("deals", deals),
            &or_empty("tasks", tasks),
            Utc::now(),
        );
        self.loading = false;
        info!(
            contacts = self.stats.contacts,
            deals = self.stats.deals,
            "Dashboard loaded"
        );
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn guard(&self) -> &LoadGuard {
        &self.guard
    }
}
