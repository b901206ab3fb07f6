//! Reports: totals and week-over-total growth for contacts and companies.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crm_entity::{Company, ContactDetail};

use super::{or_empty, percent, recent_cutoff};
use crate::gateway::CrmGateway;
use crate::guard::LoadGuard;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total_contacts: usize,
    pub total_companies: usize,
    pub recent_contacts: usize,
    pub recent_companies: usize,
    /// Recent contacts as a percentage of all contacts.
    pub contact_growth: f64,
    pub company_growth: f64,
}

impl ReportStats {
    pub fn compute(contacts: &[ContactDetail], companies: &[Company], now: DateTime<Utc>) -> Self {
        let cutoff = recent_cutoff(now);
        let recent_contacts = contacts
            .iter()
            .filter(|c| c.contact.created_at > cutoff)
            .count();
        let recent_companies = companies.iter().filter(|c| c.created_at > cutoff).count();

        Self {
            total_contacts: contacts.len(),
            total_companies: companies.len(),
            recent_contacts,
            recent_companies,
            contact_growth: percent(recent_contacts, contacts.len()),
            company_growth: percent(recent_companies, companies.len()),
        }
    }

    /// Mean of the two growth figures.
    pub fn average_growth(&self) -> f64 {
        (self.contact_growth + self.company_growth) / 2.0
    }
}

pub struct ReportsPage {
    gateway: Arc<dyn CrmGateway>,
    guard: LoadGuard,
    stats: ReportStats,
    loading: bool,
}

impl ReportsPage {
    pub fn new(gateway: Arc<dyn CrmGateway>) -> Self {
        Self {
            gateway,
            guard: LoadGuard::new(),
            stats: ReportStats::default(),
            loading: true,
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.guard.begin();
        self.loading = true;

        let gateway = self.gateway.as_ref();
        let (contacts, companies) = tokio::join!(gateway.list_contacts(), gateway.list_companies());

        if !self.guard.is_current(ticket) {
            return;
        }
        self.stats = ReportStats::compute(
            &or_empty("contacts", contacts),
            &or_empty("companies", companies),
            Utc::now(),
        );
        self.loading = false;
    }

    pub fn stats(&self) -> &ReportStats {
        &self.stats
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
