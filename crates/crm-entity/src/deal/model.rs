//! Deal entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::DealStatus;
use crate::refs::{CompanyRef, ContactRef, StageRef};

/// A sales opportunity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: Uuid,
    pub title: String,
    /// Monetary value. Always finite.
    pub amount: f64,
    pub status: DealStatus,
    pub close_date: Option<DateTime<Utc>>,
    pub company_id: Option<Uuid>,
    pub contact_id: Option<Uuid>,
    /// Pipeline stage the deal currently sits in.
    pub stage_id: Option<Uuid>,
    pub team_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A deal with its linked company, contact and stage embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealDetail {
    #[serde(flatten)]
    pub deal: Deal,
    #[serde(default)]
    pub company: Option<CompanyRef>,
    #[serde(default)]
    pub contact: Option<ContactRef>,
    #[serde(default)]
    pub stage: Option<StageRef>,
}
