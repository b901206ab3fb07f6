//! Deal repository implementation.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crm_core::result::AppResult;
use crm_entity::deal::{Deal, DealChanges, DealDetail};
use crm_entity::refs::{CompanyRef, ContactRef, StageRef};

use crate::error::db_error;

/// Deal columns plus the joined company, contact and stage names.
#[derive(Debug, FromRow)]
struct DealRow {
    #[sqlx(flatten)]
    deal: Deal,
    company_name: Option<String>,
    contact_first_name: Option<String>,
    contact_last_name: Option<String>,
    stage_name: Option<String>,
}

impl From<DealRow> for DealDetail {
    fn from(row: DealRow) -> Self {
        let company = row
            .deal
            .company_id
            .zip(row.company_name)
            .map(|(id, name)| CompanyRef { id, name });
        let contact = match (row.deal.contact_id, row.contact_first_name, row.contact_last_name) {
            (Some(id), Some(first_name), Some(last_name)) => Some(ContactRef {
                id,
                first_name,
                last_name,
            }),
            _ => None,
        };
        let stage = row
            .deal
            .stage_id
            .zip(row.stage_name)
            .map(|(id, name)| StageRef { id, name });

        DealDetail {
            deal: row.deal,
            company,
            contact,
            stage,
        }
    }
}

/// Joins applied to a CTE or table aliased `d`.
const DETAIL_JOINS: &str = "LEFT JOIN companies co ON co.id = d.company_id AND co.team_id = d.team_id \
     LEFT JOIN contacts ct ON ct.id = d.contact_id AND ct.team_id = d.team_id \
     LEFT JOIN stages s ON s.id = d.stage_id";

const DETAIL_COLUMNS: &str = "d.*, co.name AS company_name, \
     ct.first_name AS contact_first_name, ct.last_name AS contact_last_name, \
     s.name AS stage_name";

/// Repository for team-scoped deal reads and writes.
#[derive(Debug, Clone)]
pub struct DealRepository {
    pool: PgPool,
}

impl DealRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All deals of a team, newest first.
    pub async fn list_for_team(&self, team_id: Uuid) -> AppResult<Vec<DealDetail>> {
        let rows = sqlx::query_as::<_, DealRow>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM deals d {DETAIL_JOINS} \
             WHERE d.team_id = $1 ORDER BY d.created_at DESC"
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list deals"))?;

        Ok(rows.into_iter().map(DealDetail::from).collect())
    }

    pub async fn find_by_id(&self, team_id: Uuid, id: Uuid) -> AppResult<Option<DealDetail>> {
        let row = sqlx::query_as::<_, DealRow>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM deals d {DETAIL_JOINS} \
             WHERE d.id = $1 AND d.team_id = $2"
        ))
        .bind(id)
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find deal"))?;

        Ok(row.map(DealDetail::from))
    }

    /// Whether `id` names a deal of the team.
    pub async fn exists_in_team(&self, team_id: Uuid, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM deals WHERE id = $1 AND team_id = $2)",
        )
        .bind(id)
        .bind(team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check deal"))
    }

    pub async fn create(&self, team_id: Uuid, changes: &DealChanges) -> AppResult<DealDetail> {
        let row = sqlx::query_as::<_, DealRow>(&format!(
            "WITH d AS ( \
                INSERT INTO deals \
                (title, amount, status, close_date, company_id, contact_id, stage_id, team_id) \
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                RETURNING * \
             ) \
             SELECT {DETAIL_COLUMNS} FROM d {DETAIL_JOINS}"
        ))
        .bind(changes.title.trim())
        .bind(changes.amount)
        .bind(changes.status)
        .bind(changes.close_date)
        .bind(changes.company_id)
        .bind(changes.contact_id)
        .bind(changes.stage_id)
        .bind(team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create deal"))?;

        Ok(row.into())
    }

    /// Replace every field. `None` when the deal is not in the team.
    pub async fn update(
        &self,
        team_id: Uuid,
        id: Uuid,
        changes: &DealChanges,
    ) -> AppResult<Option<DealDetail>> {
        let row = sqlx::query_as::<_, DealRow>(&format!(
            "WITH d AS ( \
                UPDATE deals SET \
                title = $3, amount = $4, status = $5, close_date = $6, \
                company_id = $7, contact_id = $8, stage_id = $9, updated_at = NOW() \
                WHERE id = $1 AND team_id = $2 \
                RETURNING * \
             ) \
             SELECT {DETAIL_COLUMNS} FROM d {DETAIL_JOINS}"
        ))
        .bind(id)
        .bind(team_id)
        .bind(changes.title.trim())
        .bind(changes.amount)
        .bind(changes.status)
        .bind(changes.close_date)
        .bind(changes.company_id)
        .bind(changes.contact_id)
        .bind(changes.stage_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update deal"))?;

        Ok(row.map(DealDetail::from))
    }

    /// Delete a deal. Returns whether a row was removed.
    pub async fn delete(&self, team_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM deals WHERE id = $1 AND team_id = $2")
            .bind(id)
            .bind(team_id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete deal"))?;

        Ok(result.rows_affected() > 0)
    }
}
