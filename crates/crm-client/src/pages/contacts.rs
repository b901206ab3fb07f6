//! Contacts screen.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crm_entity::ContactDetail;
use crm_table::{Column, PageSize};

use super::{Listing, or_empty, short_date};
use crate::gateway::CrmGateway;
use crate::modal::ModalCoordinator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStats {
    pub total: usize,
    /// Distinct linked companies.
    pub companies: usize,
    /// Created in the calendar month of `now`.
    pub this_month: usize,
}

impl ContactStats {
    pub fn compute(contacts: &[ContactDetail], now: DateTime<Utc>) -> Self {
        let companies: HashSet<&str> = contacts
            .iter()
            .filter_map(|c| c.company.as_ref().map(|r| r.name.as_str()))
            .collect();
        let this_month = contacts
            .iter()
            .filter(|c| {
                let created = c.contact.created_at;
                created.year() == now.year() && created.month() == now.month()
            })
            .count();

        Self {
            total: contacts.len(),
            companies: companies.len(),
            this_month,
        }
    }
}

pub fn columns() -> Vec<Column<ContactDetail>> {
    vec![
        Column::new("name", "Name"),
        Column::new("email", "Email"),
        Column::new("phone", "Phone"),
        Column::new("company", "Company").render(|v, _| {
            if v.is_empty() {
                "—".to_string()
            } else {
                v.display()
            }
        }),
        Column::new("createdAt", "Created").render(|v, _| short_date(v, "")),
    ]
}

pub struct ContactsPage {
    gateway: Arc<dyn CrmGateway>,
    listing: Listing<ContactDetail>,
}

impl ContactsPage {
    pub fn new(gateway: Arc<dyn CrmGateway>, page_size: PageSize) -> Self {
        Self {
            gateway,
            listing: Listing::new(columns(), page_size, "contacts"),
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.listing.begin();
        let contacts = or_empty("contacts", self.gateway.list_contacts().await);
        self.listing.finish(ticket, contacts);
    }

    pub fn listing(&self) -> &Listing<ContactDetail> {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing<ContactDetail> {
        &mut self.listing
    }

    pub fn stats(&self, now: DateTime<Utc>) -> ContactStats {
        ContactStats::compute(self.listing.rows(), now)
    }

    /// Open the contact dialog on a row. Returns whether the row exists.
    pub fn edit(&self, row_id: &str, modals: &mut ModalCoordinator) -> bool {
        match self.listing.find(row_id) {
            Some(contact) => {
                modals.open(Some(contact.clone()));
                true
            }
            None => false,
        }
    }

    /// Apply a saved contact to the table without refetching.
    pub fn upsert(&mut self, saved: ContactDetail) {
        let mut rows = self.listing.rows().to_vec();
        match rows.iter_mut().find(|c| c.contact.id == saved.contact.id) {
            Some(existing) => *existing = saved,
            None => rows.insert(0, saved),
        }
        self.listing.table_mut().set_rows(rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockGateway, contact};
    use chrono::{Duration, TimeZone};
    use crm_core::types::EntityKind;
    use crm_entity::CompanyRef;
    use crm_table::TableRender;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_load_fills_table() {
        let now = Utc::now();
        let gateway = MockGateway {
            contacts: vec![contact("Ada", "Lovelace", now), contact("Alan", "Turing", now)],
            ..Default::default()
        };
        let mut page = ContactsPage::new(Arc::new(gateway), PageSize::Ten);
        assert!(page.listing().table().is_loading());

        page.load().await;

        assert!(!page.listing().table().is_loading());
        let TableRender::Rows(rendered) = page.listing().table().render() else {
            panic!("expected rows");
        };
        assert_eq!(rendered.rows.len(), 2);
        assert_eq!(rendered.rows[0].cells[3], "—");
    }

    #[tokio::test]
    async fn test_failed_load_leaves_empty_table() {
        let mut page = ContactsPage::new(Arc::new(MockGateway::failing()), PageSize::Ten);
        page.load().await;
        assert!(!page.listing().table().is_loading());
        assert!(matches!(
            page.listing().table().render(),
            TableRender::Empty { .. }
        ));
    }

    #[test]
    fn test_stats() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap();
        let mut linked = contact("Ada", "Lovelace", now);
        linked.company = Some(CompanyRef {
            id: Uuid::new_v4(),
            name: "Acme".into(),
        });
        let contacts = vec![
            linked.clone(),
            linked,
            contact("Old", "Timer", now - Duration::days(40)),
        ];
        let stats = ContactStats::compute(&contacts, now);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.companies, 1);
        assert_eq!(stats.this_month, 2);
    }

    #[tokio::test]
    async fn test_edit_opens_dialog_and_upsert_replaces_row() {
        let existing = contact("Ada", "Lovelace", Utc::now());
        let id = existing.contact.id;
        let gateway = MockGateway {
            contacts: vec![existing],
            ..Default::default()
        };
        let mut page = ContactsPage::new(Arc::new(gateway), PageSize::Ten);
        page.load().await;

        let mut modals = ModalCoordinator::new();
        assert!(page.edit(&id.to_string(), &mut modals));
        assert!(modals.is_open(EntityKind::Contact));
        assert!(!page.edit("missing", &mut modals));

        let mut renamed = contact("Ada", "King", Utc::now());
        renamed.contact.id = id;
        page.upsert(renamed);
        assert_eq!(page.listing().rows().len(), 1);
        assert_eq!(page.listing().rows()[0].contact.last_name, "King");
    }
}
