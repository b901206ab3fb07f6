//! Pipeline and stage repository implementation.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crm_core::result::AppResult;
use crm_entity::pipeline::{Pipeline, PipelineWithStages, Stage};

use crate::error::db_error;

/// Repository for team pipelines.
#[derive(Debug, Clone)]
pub struct PipelineRepository {
    pool: PgPool,
}

impl PipelineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Pipelines of a team, each with its stages in order.
    pub async fn list_for_team(&self, team_id: Uuid) -> AppResult<Vec<PipelineWithStages>> {
        let pipelines = sqlx::query_as::<_, Pipeline>(
            "SELECT * FROM pipelines WHERE team_id = $1 ORDER BY created_at ASC",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list pipelines"))?;

        if pipelines.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = pipelines.iter().map(|p| p.id).collect();
        let stages = sqlx::query_as::<_, Stage>(
            "SELECT * FROM stages WHERE pipeline_id = ANY($1) ORDER BY position ASC",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list stages"))?;

        let mut by_pipeline: HashMap<Uuid, Vec<Stage>> = HashMap::new();
        for stage in stages {
            by_pipeline.entry(stage.pipeline_id).or_default().push(stage);
        }

        Ok(pipelines
            .into_iter()
            .map(|p| {
                let stages = by_pipeline.remove(&p.id).unwrap_or_default();
                PipelineWithStages::new(p, stages)
            })
            .collect())
    }

    /// Whether the stage belongs to one of the team's pipelines.
    pub async fn stage_in_team(&self, team_id: Uuid, stage_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM stages s JOIN pipelines p ON p.id = s.pipeline_id \
             WHERE s.id = $1 AND p.team_id = $2)",
        )
        .bind(stage_id)
        .bind(team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check stage"))
    }
}
