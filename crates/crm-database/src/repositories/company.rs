//! Company repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use crm_core::result::AppResult;
use crm_entity::company::{Company, CompanyInput};

use crate::error::db_error;

/// Repository for team-scoped company reads and writes.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All companies of a team, newest first.
    pub async fn list_for_team(&self, team_id: Uuid) -> AppResult<Vec<Company>> {
        sqlx::query_as::<_, Company>(
            "SELECT * FROM companies WHERE team_id = $1 ORDER BY created_at DESC",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list companies"))
    }

    pub async fn find_by_id(&self, team_id: Uuid, id: Uuid) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1 AND team_id = $2")
            .bind(id)
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find company"))
    }

    /// Whether `id` names a company of the team.
    pub async fn exists_in_team(&self, team_id: Uuid, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1 AND team_id = $2)",
        )
        .bind(id)
        .bind(team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check company"))
    }

    pub async fn create(
        &self,
        team_id: Uuid,
        owner_id: Uuid,
        input: &CompanyInput,
    ) -> AppResult<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies \
             (name, industry, domain, website, email, phone, address, city, state, \
              zip_code, country, employees, revenue, notes, team_id, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING *",
        )
        .bind(input.name.trim())
        .bind(&input.industry)
        .bind(&input.domain)
        .bind(&input.website)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.zip_code)
        .bind(&input.country)
        .bind(input.employees)
        .bind(input.revenue)
        .bind(&input.notes)
        .bind(team_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create company"))
    }

    /// Replace the editable fields. `None` when the company is not in the team.
    pub async fn update(
        &self,
        team_id: Uuid,
        id: Uuid,
        input: &CompanyInput,
    ) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "UPDATE companies SET \
             name = $3, industry = $4, domain = $5, website = $6, email = $7, phone = $8, \
             address = $9, city = $10, state = $11, zip_code = $12, country = $13, \
             employees = $14, revenue = $15, notes = $16, updated_at = NOW() \
             WHERE id = $1 AND team_id = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(team_id)
        .bind(input.name.trim())
        .bind(&input.industry)
        .bind(&input.domain)
        .bind(&input.website)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.zip_code)
        .bind(&input.country)
        .bind(input.employees)
        .bind(input.revenue)
        .bind(&input.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update company"))
    }
}
