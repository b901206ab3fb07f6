//! Task use cases. Tasks belong to a user rather than a team.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_database::repositories::{
    CompanyRepository, ContactRepository, DealRepository, TaskRepository,
};
use crm_entity::task::{TaskDetail, TaskInput};

use crate::context::RequestContext;
use crate::scope::{TeamScope, unknown_link};

/// Task management for the calling user.
#[derive(Debug, Clone)]
pub struct TaskService {
    tasks: Arc<TaskRepository>,
    companies: Arc<CompanyRepository>,
    contacts: Arc<ContactRepository>,
    deals: Arc<DealRepository>,
    scope: TeamScope,
}

impl TaskService {
    pub fn new(
        tasks: Arc<TaskRepository>,
        companies: Arc<CompanyRepository>,
        contacts: Arc<ContactRepository>,
        deals: Arc<DealRepository>,
        scope: TeamScope,
    ) -> Self {
        Self {
            tasks,
            companies,
            contacts,
            deals,
            scope,
        }
    }

    /// Tasks owned by the caller.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<TaskDetail>> {
        self.tasks.list_for_owner(ctx.user_id).await
    }

    pub async fn create(&self, ctx: &RequestContext, input: &TaskInput) -> AppResult<TaskDetail> {
        self.check_links(ctx, input).await?;
        let task = self.tasks.create(ctx.user_id, input).await?;

        info!(user_id = %ctx.user_id, task_id = %task.task.id, "Task created");
        Ok(task)
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: &TaskInput,
    ) -> AppResult<TaskDetail> {
        self.check_links(ctx, input).await?;
        let task = self
            .tasks
            .update(ctx.user_id, id, input)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))?;

        info!(
            user_id = %ctx.user_id,
            task_id = %id,
            completed = task.task.is_completed(),
            "Task updated"
        );
        Ok(task)
    }

    /// Linked records must belong to the caller's team.
    async fn check_links(&self, ctx: &RequestContext, input: &TaskInput) -> AppResult<()> {
        if input.company_id.is_none() && input.contact_id.is_none() && input.deal_id.is_none() {
            return Ok(());
        }
        let team_id = self.scope.require(ctx).await?;

        if let Some(id) = input.company_id {
            if !self.companies.exists_in_team(team_id, id).await? {
                return Err(unknown_link("companyId", "company"));
            }
        }
        if let Some(id) = input.contact_id {
            if !self.contacts.exists_in_team(team_id, id).await? {
                return Err(unknown_link("contactId", "contact"));
            }
        }
        if let Some(id) = input.deal_id {
            if !self.deals.exists_in_team(team_id, id).await? {
                return Err(unknown_link("dealId", "deal"));
            }
        }
        Ok(())
    }
}
