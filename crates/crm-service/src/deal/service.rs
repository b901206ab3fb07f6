//! Deal use cases.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_database::repositories::{
    CompanyRepository, ContactRepository, DealRepository, PipelineRepository,
};
use crm_entity::deal::{DealChanges, DealDetail, DealInput};

use super::coerce::coerce;
use crate::context::RequestContext;
use crate::scope::{TeamScope, unknown_link};

/// Team-scoped deal management.
#[derive(Debug, Clone)]
pub struct DealService {
    deals: Arc<DealRepository>,
    companies: Arc<CompanyRepository>,
    contacts: Arc<ContactRepository>,
    pipelines: Arc<PipelineRepository>,
    scope: TeamScope,
}

impl DealService {
    pub fn new(
        deals: Arc<DealRepository>,
        companies: Arc<CompanyRepository>,
        contacts: Arc<ContactRepository>,
        pipelines: Arc<PipelineRepository>,
        scope: TeamScope,
    ) -> Self {
        Self {
            deals,
            companies,
            contacts,
            pipelines,
            scope,
        }
    }

    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<DealDetail>> {
        match self.scope.current(ctx).await? {
            Some(team_id) => self.deals.list_for_team(team_id).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<DealDetail> {
        let Some(team_id) = self.scope.current(ctx).await? else {
            return Err(AppError::not_found("Deal not found"));
        };
        self.deals
            .find_by_id(team_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Deal not found"))
    }

    /// Create a deal. The payload is coerced before any database access.
    pub async fn create(&self, ctx: &RequestContext, input: &DealInput) -> AppResult<DealDetail> {
        let changes = coerce(input)?;
        let team_id = self.scope.require(ctx).await?;
        self.check_links(team_id, &changes).await?;

        let deal = self.deals.create(team_id, &changes).await?;

        info!(
            user_id = %ctx.user_id,
            team_id = %team_id,
            deal_id = %deal.deal.id,
            amount = deal.deal.amount,
            status = %deal.deal.status,
            "Deal created"
        );

        Ok(deal)
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: &DealInput,
    ) -> AppResult<DealDetail> {
        let changes = coerce(input)?;
        let team_id = self.scope.require(ctx).await?;
        self.check_links(team_id, &changes).await?;

        let deal = self
            .deals
            .update(team_id, id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Deal not found"))?;

        info!(user_id = %ctx.user_id, deal_id = %id, status = %deal.deal.status, "Deal updated");

        Ok(deal)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let team_id = self.scope.require(ctx).await?;
        if !self.deals.delete(team_id, id).await? {
            return Err(AppError::not_found("Deal not found"));
        }

        info!(user_id = %ctx.user_id, deal_id = %id, "Deal deleted");
        Ok(())
    }

    async fn check_links(&self, team_id: Uuid, changes: &DealChanges) -> AppResult<()> {
        if let Some(id) = changes.company_id {
            if !self.companies.exists_in_team(team_id, id).await? {
                return Err(unknown_link("companyId", "company"));
            }
        }
        if let Some(id) = changes.contact_id {
            if !self.contacts.exists_in_team(team_id, id).await? {
                return Err(unknown_link("contactId", "contact"));
            }
        }
        if let Some(id) = changes.stage_id {
            if !self.pipelines.stage_in_team(team_id, id).await? {
                return Err(unknown_link("stageId", "stage"));
            }
        }
        Ok(())
    }
}
