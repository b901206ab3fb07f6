//! Activity feed synthesized from record creation times.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crm_core::types::EntityKind;
use crm_entity::{Company, ContactDetail};

use super::or_empty;
use crate::gateway::CrmGateway;
use crate::guard::LoadGuard;

/// Entries shown in the feed.
pub const FEED_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ContactCreated,
    CompanyCreated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub entity_kind: EntityKind,
    pub entity_name: String,
}

impl Activity {
    fn contact_created(contact: &ContactDetail) -> Self {
        Self {
            id: format!("contact-{}", contact.contact.id),
            kind: ActivityKind::ContactCreated,
            title: "New Contact Added".to_string(),
            description: format!("{} was added to the CRM", contact.name),
            timestamp: contact.contact.created_at,
            entity_kind: EntityKind::Contact,
            entity_name: contact.name.clone(),
        }
    }

    fn company_created(company: &Company) -> Self {
        Self {
            id: format!("company-{}", company.id),
            kind: ActivityKind::CompanyCreated,
            title: "New Company Added".to_string(),
            description: format!("{} was registered in the system", company.name),
            timestamp: company.created_at,
            entity_kind: EntityKind::Company,
            entity_name: company.name.clone(),
        }
    }
}

/// Newest first, at most [`FEED_LIMIT`] entries.
pub fn build_feed(contacts: &[ContactDetail], companies: &[Company]) -> Vec<Activity> {
    let mut feed: Vec<Activity> = contacts
        .iter()
        .map(Activity::contact_created)
        .chain(companies.iter().map(Activity::company_created))
        .collect();
    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed.truncate(FEED_LIMIT);
    feed
}

/// "Today", "Yesterday", "N days ago" within a week, else the date.
///
/// Days are counted by rounding the elapsed time up to whole days.
pub fn relative_day(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    const DAY_SECONDS: i64 = 24 * 60 * 60;
    let elapsed = (now - timestamp).num_seconds().abs();
    let days = (elapsed + DAY_SECONDS - 1) / DAY_SECONDS;

    match days {
        0 | 1 => "Today".to_string(),
        2 => "Yesterday".to_string(),
        3..=7 => format!("{} days ago", days - 1),
        _ => timestamp.format("%-m/%-d/%Y").to_string(),
    }
}

pub struct ActivitiesPage {
    gateway: Arc<dyn CrmGateway>,
    guard: LoadGuard,
    feed: Vec<Activity>,
    loading: bool,
}

impl ActivitiesPage {
    pub fn new(gateway: Arc<dyn CrmGateway>) -> Self {
        Self {
            gateway,
            guard: LoadGuard::new(),
            feed: Vec::new(),
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
        self.feed = build_feed(
            &or_empty("contacts", contacts),
            &or_empty("companies", companies),
        );
        self.loading = false;
    }

    pub fn feed(&self) -> &[Activity] {
        &self.feed
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockGateway, company_created, contact};
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_feed_is_newest_first_and_capped() {
        let now = Utc::now();
        let contacts: Vec<ContactDetail> = (0..15)
            .map(|i| contact("Person", &i.to_string(), now - Duration::hours(i * 2)))
            .collect();
        let companies: Vec<Company> = (0..10)
            .map(|i| company_created(&format!("Co {i}"), now - Duration::hours(i * 2 + 1)))
            .collect();

        let feed = build_feed(&contacts, &companies);
        assert_eq!(feed.len(), FEED_LIMIT);
        assert!(feed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert_eq!(feed[0].entity_name, "Person 0");
        assert_eq!(feed[1].kind, ActivityKind::CompanyCreated);
        assert_eq!(feed[1].description, "Co 0 was registered in the system");
    }

    #[test]
    fn test_relative_day_labels() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_day(now, now), "Today");
        assert_eq!(relative_day(now - Duration::hours(5), now), "Today");
        assert_eq!(relative_day(now - Duration::hours(30), now), "Yesterday");
        assert_eq!(relative_day(now - Duration::hours(80), now), "3 days ago");
        assert_eq!(relative_day(now - Duration::days(30), now), "2/14/2024");
    }

    #[tokio::test]
    async fn test_failed_load_gives_empty_feed() {
        let mut page = ActivitiesPage::new(Arc::new(MockGateway::failing()));
        page.load().await;
        assert!(!page.is_loading());
        assert!(page.feed().is_empty());
    }
}
