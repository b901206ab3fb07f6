//! Company entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An organization tracked by a team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub industry: Option<String>,
    /// Primary web domain, e.g. `acme.com`.
    pub domain: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    /// Headcount.
    pub employees: Option<i32>,
    /// Annual revenue.
    pub revenue: Option<f64>,
    pub notes: Option<String>,
    pub team_id: Uuid,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    pub fn has_domain(&self) -> bool {
        self.domain.as_deref().is_some_and(|d| !d.trim().is_empty())
    }

    /// "City, State, Country" from whichever parts are set.
    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.state, &self.country]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.trim().is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Company {
        let now = Utc::now();
        Company {
            id: Uuid::new_v4(),
            name: "Acme".into(),
            industry: None,
            domain: Some("  ".into()),
            website: None,
            email: None,
            phone: None,
            address: None,
            city: Some("Springfield".into()),
            state: None,
            zip_code: None,
            country: Some("USA".into()),
            employees: None,
            revenue: None,
            notes: None,
            team_id: Uuid::new_v4(),
            owner_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_blank_domain_does_not_count() {
        assert!(!company().has_domain());
    }

    #[test]
    fn test_location_skips_missing_parts() {
        assert_eq!(company().location().as_deref(), Some("Springfield, USA"));
        let bare = Company {
            city: None,
            country: None,
            ..company()
        };
        assert!(bare.location().is_none());
    }
}
