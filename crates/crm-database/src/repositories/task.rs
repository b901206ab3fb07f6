//! Task repository implementation.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crm_core::result::AppResult;
use crm_entity::refs::{CompanyRef, ContactRef, DealRef};
use crm_entity::task::{Task, TaskDetail, TaskInput};

use crate::error::db_error;

#[derive(Debug, FromRow)]
struct TaskRow {
    #[sqlx(flatten)]
    task: Task,
    company_name: Option<String>,
    contact_first_name: Option<String>,
    contact_last_name: Option<String>,
    deal_title: Option<String>,
}

impl From<TaskRow> for TaskDetail {
    fn from(row: TaskRow) -> Self {
        let company = row
            .task
            .company_id
            .zip(row.company_name)
            .map(|(id, name)| CompanyRef { id, name });
        let contact = match (row.task.contact_id, row.contact_first_name, row.contact_last_name) {
            (Some(id), Some(first_name), Some(last_name)) => Some(ContactRef {
                id,
                first_name,
                last_name,
            }),
            _ => None,
        };
        let deal = row
            .task
            .deal_id
            .zip(row.deal_title)
            .map(|(id, title)| DealRef { id, title });

        TaskDetail {
            task: row.task,
            company,
            contact,
            deal,
        }
    }
}

const DETAIL_COLUMNS: &str = "t.*, co.name AS company_name, \
     ct.first_name AS contact_first_name, ct.last_name AS contact_last_name, \
     dl.title AS deal_title";

const DETAIL_JOINS: &str = "LEFT JOIN companies co ON co.id = t.company_id \
     LEFT JOIN contacts ct ON ct.id = t.contact_id \
     LEFT JOIN deals dl ON dl.id = t.deal_id";

/// Repository for tasks, scoped by owning user.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Tasks owned by the user, soonest due first, undated last.
    pub async fn list_for_owner(&self, owner_id: Uuid) -> AppResult<Vec<TaskDetail>> {
        let rows = sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM tasks t {DETAIL_JOINS} \
             WHERE t.owner_id = $1 ORDER BY t.due_at ASC NULLS LAST, t.created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list tasks"))?;

        Ok(rows.into_iter().map(TaskDetail::from).collect())
    }

    pub async fn create(&self, owner_id: Uuid, input: &TaskInput) -> AppResult<TaskDetail> {
        let row = sqlx::query_as::<_, TaskRow>(&format!(
            "WITH t AS ( \
                INSERT INTO tasks \
                (title, due_at, completed_at, company_id, contact_id, deal_id, owner_id) \
                VALUES ($1, $2, $3, $4, $5, $6, $7) \
                RETURNING * \
             ) \
             SELECT {DETAIL_COLUMNS} FROM t {DETAIL_JOINS}"
        ))
        .bind(input.title.trim())
        .bind(input.due_at)
        .bind(input.completed_at)
        .bind(input.company_id)
        .bind(input.contact_id)
        .bind(input.deal_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create task"))?;

        Ok(row.into())
    }

    /// Replace every field. `None` when the task is not owned by the user.
    pub async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        input: &TaskInput,
    ) -> AppResult<Option<TaskDetail>> {
        let row = sqlx::query_as::<_, TaskRow>(&format!(
            "WITH t AS ( \
                UPDATE tasks SET \
                title = $3, due_at = $4, completed_at = $5, \
                company_id = $6, contact_id = $7, deal_id = $8, updated_at = NOW() \
                WHERE id = $1 AND owner_id = $2 \
                RETURNING * \
             ) \
             SELECT {DETAIL_COLUMNS} FROM t {DETAIL_JOINS}"
        ))
        .bind(id)
        .bind(owner_id)
        .bind(input.title.trim())
        .bind(input.due_at)
        .bind(input.completed_at)
        .bind(input.company_id)
        .bind(input.contact_id)
        .bind(input.deal_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update task"))?;

        Ok(row.map(TaskDetail::from))
    }
}
