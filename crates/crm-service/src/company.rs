//! Company use cases.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_database::repositories::CompanyRepository;
use crm_entity::company::{Company, CompanyInput};

use crate::context::RequestContext;
use crate::scope::TeamScope;

/// Team-scoped company management.
#[derive(Debug, Clone)]
pub struct CompanyService {
    companies: Arc<CompanyRepository>,
    scope: TeamScope,
}

impl CompanyService {
    pub fn new(companies: Arc<CompanyRepository>, scope: TeamScope) -> Self {
        Self { companies, scope }
    }

    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Company>> {
        match self.scope.current(ctx).await? {
            Some(team_id) => self.companies.list_for_team(team_id).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn create(&self, ctx: &RequestContext, input: &CompanyInput) -> AppResult<Company> {
        let team_id = self.scope.require(ctx).await?;
        let company = self.companies.create(team_id, ctx.user_id, input).await?;

        info!(
            user_id = %ctx.user_id,
            team_id = %team_id,
            company_id = %company.id,
            "Company created"
        );

        Ok(company)
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: &CompanyInput,
    ) -> AppResult<Company> {
        let team_id = self.scope.require(ctx).await?;
        let company = self
            .companies
            .update(team_id, id, input)
            .await?
            .ok_or_else(|| AppError::not_found("Company not found"))?;

        info!(user_id = %ctx.user_id, company_id = %id, "Company updated");

        Ok(company)
    }
}
