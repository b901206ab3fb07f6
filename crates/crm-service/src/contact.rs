//! Contact use cases.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_database::repositories::{CompanyRepository, ContactRepository};
use crm_entity::contact::{ContactDetail, ContactInput};

use crate::context::RequestContext;
use crate::scope::{TeamScope, unknown_link};

/// Team-scoped contact management.
#[derive(Debug, Clone)]
pub struct ContactService {
    contacts: Arc<ContactRepository>,
    companies: Arc<CompanyRepository>,
    scope: TeamScope,
}

impl ContactService {
    pub fn new(
        contacts: Arc<ContactRepository>,
        companies: Arc<CompanyRepository>,
        scope: TeamScope,
    ) -> Self {
        Self {
            contacts,
            companies,
            scope,
        }
    }

    /// Contacts of the caller's team; empty when the caller has none.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<ContactDetail>> {
        match self.scope.current(ctx).await? {
            Some(team_id) => self.contacts.list_for_team(team_id).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: &ContactInput,
    ) -> AppResult<ContactDetail> {
        let team_id = self.scope.require(ctx).await?;
        self.check_company(team_id, input.company_id).await?;

        let contact = self.contacts.create(team_id, ctx.user_id, input).await?;

        info!(
            user_id = %ctx.user_id,
            team_id = %team_id,
            contact_id = %contact.contact.id,
            "Contact created"
        );

        Ok(contact)
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: &ContactInput,
    ) -> AppResult<ContactDetail> {
        let team_id = self.scope.require(ctx).await?;
        self.check_company(team_id, input.company_id).await?;

        let contact = self
            .contacts
            .update(team_id, id, input)
            .await?
            .ok_or_else(|| AppError::not_found("Contact not found"))?;

        info!(user_id = %ctx.user_id, contact_id = %id, "Contact updated");

        Ok(contact)
    }

    async fn check_company(&self, team_id: Uuid, company_id: Option<Uuid>) -> AppResult<()> {
        if let Some(company_id) = company_id {
            if !self.companies.exists_in_team(team_id, company_id).await? {
                return Err(unknown_link("companyId", "company"));
            }
        }
        Ok(())
    }
}
