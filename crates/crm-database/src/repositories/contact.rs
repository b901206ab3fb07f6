//! Contact repository implementation.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crm_core::result::AppResult;
use crm_entity::contact::{Contact, ContactDetail, ContactInput};
use crm_entity::refs::CompanyRef;

use crate::error::db_error;

/// Contact columns plus the joined company name.
#[derive(Debug, FromRow)]
struct ContactRow {
    #[sqlx(flatten)]
    contact: Contact,
    company_name: Option<String>,
}

impl From<ContactRow> for ContactDetail {
    fn from(row: ContactRow) -> Self {
        let company = row
            .contact
            .company_id
            .zip(row.company_name)
            .map(|(id, name)| CompanyRef { id, name });
        ContactDetail::new(row.contact, company)
    }
}

const SELECT_DETAIL: &str = "SELECT c.*, co.name AS company_name FROM contacts c \
     LEFT JOIN companies co ON co.id = c.company_id AND co.team_id = c.team_id";

/// Repository for team-scoped contact reads and writes.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All contacts of a team with their company, newest first.
    pub async fn list_for_team(&self, team_id: Uuid) -> AppResult<Vec<ContactDetail>> {
        let rows = sqlx::query_as::<_, ContactRow>(&format!(
            "{SELECT_DETAIL} WHERE c.team_id = $1 ORDER BY c.created_at DESC"
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list contacts"))?;

        Ok(rows.into_iter().map(ContactDetail::from).collect())
    }

    pub async fn find_by_id(&self, team_id: Uuid, id: Uuid) -> AppResult<Option<ContactDetail>> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "{SELECT_DETAIL} WHERE c.id = $1 AND c.team_id = $2"
        ))
        .bind(id)
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find contact"))?;

        Ok(row.map(ContactDetail::from))
    }

    /// Whether `id` names a contact of the team.
    pub async fn exists_in_team(&self, team_id: Uuid, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM contacts WHERE id = $1 AND team_id = $2)",
        )
        .bind(id)
        .bind(team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check contact"))
    }

    pub async fn create(
        &self,
        team_id: Uuid,
        owner_id: Uuid,
        input: &ContactInput,
    ) -> AppResult<ContactDetail> {
        let row = sqlx::query_as::<_, ContactRow>(
            "WITH c AS ( \
                INSERT INTO contacts \
                (first_name, last_name, email, phone, job_title, company_id, team_id, owner_id) \
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                RETURNING * \
             ) \
             SELECT c.*, co.name AS company_name FROM c \
             LEFT JOIN companies co ON co.id = c.company_id AND co.team_id = c.team_id",
        )
        .bind(input.first_name.trim())
        .bind(input.last_name.trim())
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.job_title)
        .bind(input.company_id)
        .bind(team_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create contact"))?;

        Ok(row.into())
    }

    /// Replace the editable fields. `None` when the contact is not in the team.
    pub async fn update(
        &self,
        team_id: Uuid,
        id: Uuid,
        input: &ContactInput,
    ) -> AppResult<Option<ContactDetail>> {
        let row = sqlx::query_as::<_, ContactRow>(
            "WITH c AS ( \
                UPDATE contacts SET \
                first_name = $3, last_name = $4, email = $5, phone = $6, job_title = $7, \
                company_id = $8, updated_at = NOW() \
                WHERE id = $1 AND team_id = $2 \
                RETURNING * \
             ) \
             SELECT c.*, co.name AS company_name FROM c \
             LEFT JOIN companies co ON co.id = c.company_id AND co.team_id = c.team_id",
        )
        .bind(id)
        .bind(team_id)
        .bind(input.first_name.trim())
        .bind(input.last_name.trim())
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.job_title)
        .bind(input.company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update contact"))?;

        Ok(row.map(ContactDetail::from))
    }
}
