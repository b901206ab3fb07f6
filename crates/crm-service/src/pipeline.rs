//! Pipeline listing.

use std::sync::Arc;

use crm_core::result::AppResult;
use crm_database::repositories::PipelineRepository;
use crm_entity::pipeline::PipelineWithStages;

use crate::context::RequestContext;
use crate::scope::TeamScope;

/// Read access to the team's pipelines.
#[derive(Debug, Clone)]
pub struct PipelineService {
    pipelines: Arc<PipelineRepository>,
    scope: TeamScope,
}

impl PipelineService {
    pub fn new(pipelines: Arc<PipelineRepository>, scope: TeamScope) -> Self {
        Self { pipelines, scope }
    }

    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<PipelineWithStages>> {
        match self.scope.current(ctx).await? {
            Some(team_id) => self.pipelines.list_for_team(team_id).await,
            None => Ok(Vec::new()),
        }
    }
}
