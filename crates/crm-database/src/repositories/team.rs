//! Team repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use crm_core::result::AppResult;
use crm_entity::team::Team;

use crate::error::db_error;

/// Resolves which team a caller acts on behalf of.
#[derive(Debug, Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The team the user owns, or else the first team they joined.
    pub async fn find_for_user(&self, user_id: Uuid) -> AppResult<Option<Team>> {
        let owned = sqlx::query_as::<_, Team>(
            "SELECT * FROM teams WHERE owner_id = $1 ORDER BY created_at ASC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find owned team"))?;

        if owned.is_some() {
            return Ok(owned);
        }

        sqlx::query_as::<_, Team>(
            "SELECT t.* FROM teams t \
             JOIN team_memberships m ON m.team_id = t.id \
             WHERE m.user_id = $1 \
             ORDER BY m.created_at ASC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find team membership"))
    }
}
