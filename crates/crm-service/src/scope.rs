//! Team scoping shared by all team-owned services.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_database::repositories::TeamRepository;

use crate::context::RequestContext;

/// Resolves the team a request acts on.
#[derive(Debug, Clone)]
pub struct TeamScope {
    teams: Arc<TeamRepository>,
}

impl TeamScope {
    pub fn new(teams: Arc<TeamRepository>) -> Self {
        Self { teams }
    }

    /// The caller's team, if they own or belong to one.
    pub async fn current(&self, ctx: &RequestContext) -> AppResult<Option<Uuid>> {
        let team = self.teams.find_for_user(ctx.user_id).await?;
        if team.is_none() {
            debug!(user_id = %ctx.user_id, "User has no team");
        }
        Ok(team.map(|t| t.id))
    }

    /// The caller's team, or `Forbidden` for writes without one.
    pub async fn require(&self, ctx: &RequestContext) -> AppResult<Uuid> {
        self.current(ctx)
            .await?
            .ok_or_else(|| AppError::forbidden("No team found for user"))
    }
}

/// Validation error for a link to a record outside the caller's team.
pub(crate) fn unknown_link(field: &str, label: &str) -> AppError {
    let message = format!("Unknown {label}");
    AppError::validation(message.clone())
        .with_details(serde_json::json!({ field: [message] }))
}
