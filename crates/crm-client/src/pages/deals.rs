//! Deals screen.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crm_core::{AppError, AppResult};
use crm_entity::{DealDetail, DealStatus};
use crm_table::{CellValue, Column, PageSize};

use super::{Listing, or_empty, short_date};
use crate::gateway::CrmGateway;
use crate::modal::ModalCoordinator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealStats {
    pub total: usize,
    pub total_value: f64,
    pub average_value: f64,
    pub open: usize,
    pub won: usize,
    pub lost: usize,
    /// Won share of closed deals, rounded to a whole percent.
    pub win_rate: u32,
}

impl DealStats {
    pub fn compute(deals: &[DealDetail]) -> Self {
        let count = |status: DealStatus| deals.iter().filter(|d| d.deal.status == status).count();
        let total_value: f64 = deals.iter().map(|d| d.deal.amount).sum();
        let won = count(DealStatus::Won);
        let lost = count(DealStatus::Lost);

        Self {
            total: deals.len(),
            total_value,
            average_value: if deals.is_empty() {
                0.0
            } else {
                total_value / deals.len() as f64
            },
            open: count(DealStatus::Open),
            won,
            lost,
            win_rate: super::percent(won, won + lost).round() as u32,
        }
    }
}

pub fn columns() -> Vec<Column<DealDetail>> {
    vec![
        Column::new("title", "Deal"),
        Column::new("amount", "Value").render(|v, _| match v {
            CellValue::Number(n) => format!("${n:.0}"),
            _ => "$0".to_string(),
        }),
        Column::new("status", "Status"),
        Column::new("contact", "Contact")
            .sortable(false)
            .render(|v, _| {
                if v.is_empty() {
                    "No contact".to_string()
                } else {
                    v.display()
                }
            }),
        Column::new("closeDate", "Close Date").render(|v, _| short_date(v, "Not set")),
        Column::new("stage", "Stage"),
    ]
}

pub struct DealsPage {
    gateway: Arc<dyn CrmGateway>,
    listing: Listing<DealDetail>,
}

impl DealsPage {
    pub fn new(gateway: Arc<dyn CrmGateway>, page_size: PageSize) -> Self {
        Self {
            gateway,
            listing: Listing::new(columns(), page_size, "deals"),
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.listing.begin();
        let deals = or_empty("deals", self.gateway.list_deals().await);
        self.listing.finish(ticket, deals);
    }

    pub fn listing(&self) -> &Listing<DealDetail> {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing<DealDetail> {
        &mut self.listing
    }

    pub fn stats(&self) -> DealStats {
        DealStats::compute(self.listing.rows())
    }

    pub fn edit(&self, row_id: &str, modals: &mut ModalCoordinator) -> bool {
        match self.listing.find(row_id) {
            Some(deal) => {
                modals.open(Some(deal.clone()));
                true
            }
            None => false,
        }
    }

    /// Delete through the API, then drop the row locally.
    pub async fn delete(&mut self, row_id: &str) -> AppResult<()> {
        let id = Uuid::parse_str(row_id)
            .map_err(|_| AppError::validation(format!("Invalid deal id '{row_id}'")))?;
        self.gateway.delete_deal(id).await?;

        let rows: Vec<DealDetail> = self
            .listing
            .rows()
            .iter()
            .filter(|d| d.deal.id != id)
            .cloned()
            .collect();
        self.listing.table_mut().set_rows(rows);
        info!(deal_id = %id, "Deal deleted");
        Ok(())
    }
}
