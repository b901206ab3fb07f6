//! Sales pipelines and their ordered stages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named sequence of stages belonging to a team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub id: Uuid,
    pub name: String,
    pub team_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// One step of a pipeline. Descriptive only; deals move freely.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "order")]
    pub position: i32,
    pub pipeline_id: Uuid,
}

/// A pipeline with its stages sorted by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineWithStages {
    #[serde(flatten)]
    pub pipeline: Pipeline,
    pub stages: Vec<Stage>,
}

impl PipelineWithStages {
    pub fn new(pipeline: Pipeline, mut stages: Vec<Stage>) -> Self {
        stages.retain(|s| s.pipeline_id == pipeline.id);
        stages.sort_by_key(|s| s.position);
        Self { pipeline, stages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_are_ordered_and_filtered() {
        let pipeline = Pipeline {
            id: Uuid::new_v4(),
            name: "Sales Pipeline".into(),
            team_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        let stage = |name: &str, position: i32, pipeline_id: Uuid| Stage {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
            pipeline_id,
        };
        let stages = vec![
            stage("Proposal", 3, pipeline.id),
            stage("Lead", 1, pipeline.id),
            stage("Elsewhere", 2, Uuid::new_v4()),
        ];
        let with = PipelineWithStages::new(pipeline, stages);
        let names: Vec<_> = with.stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Lead", "Proposal"]);
        let json = serde_json::to_value(&with).unwrap();
        assert_eq!(json["stages"][0]["order"], 1);
    }
}
