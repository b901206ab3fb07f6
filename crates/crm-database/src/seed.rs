//! Demo data for the development account.
//!
//! Creates the development user, a team it owns, a sales pipeline and a set
//! of companies, contacts, deals and tasks. Runs at most once per user: if
//! the user already owns a team nothing is written.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crm_core::config::AuthConfig;
use crm_core::result::AppResult;
use crm_entity::{DealStatus, MemberRole};

use crate::error::db_error;

const TEAM_NAME: &str = "TechCorp Sales Team";
const PIPELINE_NAME: &str = "Sales Pipeline";

const STAGES: [&str; 6] = [
    "Lead",
    "Qualified",
    "Proposal",
    "Negotiation",
    "Closed Won",
    "Closed Lost",
];

struct SeedCompany {
    name: &'static str,
    domain: &'static str,
    industry: &'static str,
}

struct SeedContact {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    job_title: &'static str,
    company: usize,
}

struct SeedDeal {
    title: &'static str,
    amount: f64,
    close_in_days: i32,
    company: usize,
    contact: usize,
    stage: usize,
}

struct SeedTask {
    title: &'static str,
    due_in_days: i32,
    completed: bool,
    company: usize,
    contact: usize,
    deal: Option<usize>,
}

const COMPANIES: [SeedCompany; 8] = [
    SeedCompany { name: "Innovate Solutions Inc.", domain: "innovatesolutions.com", industry: "Technology" },
    SeedCompany { name: "Global Manufacturing Corp", domain: "globalmanufacturing.com", industry: "Manufacturing" },
    SeedCompany { name: "HealthTech Ventures", domain: "healthtechventures.com", industry: "Healthcare" },
    SeedCompany { name: "EcoEnergy Systems", domain: "ecoenergysystems.com", industry: "Energy" },
    SeedCompany { name: "DataFlow Analytics", domain: "dataflowanalytics.com", industry: "Technology" },
    SeedCompany { name: "RetailMax Enterprises", domain: "retailmax.com", industry: "Retail" },
    SeedCompany { name: "FinanceFirst Solutions", domain: "financefirst.com", industry: "Finance" },
    SeedCompany { name: "EduTech Academy", domain: "edutechacademy.com", industry: "Education" },
];

const CONTACTS: [SeedContact; 16] = [
    SeedContact { first_name: "Robert", last_name: "Chen", email: "robert.chen@innovatesolutions.com", phone: "+1 (555) 123-4567", job_title: "Chief Technology Officer", company: 0 },
    SeedContact { first_name: "Emily", last_name: "Rodriguez", email: "emily.rodriguez@innovatesolutions.com", phone: "+1 (555) 123-4568", job_title: "VP of Product Development", company: 0 },
    SeedContact { first_name: "James", last_name: "Wilson", email: "james.wilson@globalmanufacturing.com", phone: "+1 (555) 987-6543", job_title: "Operations Director", company: 1 },
    SeedContact { first_name: "Lisa", last_name: "Thompson", email: "lisa.thompson@globalmanufacturing.com", phone: "+1 (555) 987-6544", job_title: "IT Manager", company: 1 },
    SeedContact { first_name: "Michael", last_name: "Foster", email: "michael.foster@healthtechventures.com", phone: "+1 (555) 456-7890", job_title: "Chief Medical Officer", company: 2 },
    SeedContact { first_name: "Sarah", last_name: "Kim", email: "sarah.kim@healthtechventures.com", phone: "+1 (555) 456-7891", job_title: "Head of Digital Innovation", company: 2 },
    SeedContact { first_name: "David", last_name: "Green", email: "david.green@ecoenergysystems.com", phone: "+1 (555) 321-0987", job_title: "Sustainability Director", company: 3 },
    SeedContact { first_name: "Maria", last_name: "Gonzalez", email: "maria.gonzalez@ecoenergysystems.com", phone: "+1 (555) 321-0988", job_title: "Project Manager", company: 3 },
    SeedContact { first_name: "Alex", last_name: "Taylor", email: "alex.taylor@dataflowanalytics.com", phone: "+1 (555) 654-3210", job_title: "Chief Data Officer", company: 4 },
    SeedContact { first_name: "Jessica", last_name: "Brown", email: "jessica.brown@dataflowanalytics.com", phone: "+1 (555) 654-3211", job_title: "Senior Analytics Manager", company: 4 },
    SeedContact { first_name: "Mark", last_name: "Anderson", email: "mark.anderson@retailmax.com", phone: "+1 (555) 789-0123", job_title: "Chief Information Officer", company: 5 },
    SeedContact { first_name: "Jennifer", last_name: "Lee", email: "jennifer.lee@retailmax.com", phone: "+1 (555) 789-0124", job_title: "Digital Transformation Lead", company: 5 },
    SeedContact { first_name: "Thomas", last_name: "White", email: "thomas.white@financefirst.com", phone: "+1 (555) 234-5678", job_title: "VP of Technology", company: 6 },
    SeedContact { first_name: "Amanda", last_name: "Clark", email: "amanda.clark@financefirst.com", phone: "+1 (555) 234-5679", job_title: "Business Process Manager", company: 6 },
    SeedContact { first_name: "Kevin", last_name: "Martinez", email: "kevin.martinez@edutechacademy.com", phone: "+1 (555) 567-8901", job_title: "Dean of Technology", company: 7 },
    SeedContact { first_name: "Rachel", last_name: "Davis", email: "rachel.davis@edutechacademy.com", phone: "+1 (555) 567-8902", job_title: "Director of Learning Innovation", company: 7 },
];

const DEALS: [SeedDeal; 8] = [
    SeedDeal { title: "AI-Powered Analytics Platform", amount: 125_000.0, close_in_days: 30, company: 0, contact: 0, stage: 2 },
    SeedDeal { title: "Manufacturing Process Optimization", amount: 350_000.0, close_in_days: 75, company: 1, contact: 2, stage: 3 },
    SeedDeal { title: "Healthcare Data Integration Suite", amount: 275_000.0, close_in_days: -10, company: 2, contact: 4, stage: 4 },
    SeedDeal { title: "Renewable Energy Management System", amount: 89_000.0, close_in_days: 90, company: 3, contact: 6, stage: 1 },
    SeedDeal { title: "Advanced Analytics Dashboard", amount: 195_000.0, close_in_days: 45, company: 4, contact: 8, stage: 2 },
    SeedDeal { title: "Retail Customer Experience Platform", amount: 425_000.0, close_in_days: 120, company: 5, contact: 10, stage: 0 },
    SeedDeal { title: "Financial Automation Suite", amount: 315_000.0, close_in_days: 60, company: 6, contact: 12, stage: 3 },
    SeedDeal { title: "Educational Technology Platform", amount: 155_000.0, close_in_days: -30, company: 7, contact: 14, stage: 5 },
];

const TASKS: [SeedTask; 8] = [
    SeedTask { title: "Follow up on AI platform demo feedback", due_in_days: 0, completed: false, company: 0, contact: 0, deal: Some(0) },
    SeedTask { title: "Send contract for final review", due_in_days: 0, completed: false, company: 6, contact: 12, deal: Some(6) },
    SeedTask { title: "Prepare manufacturing cost analysis proposal", due_in_days: 1, completed: false, company: 1, contact: 2, deal: Some(1) },
    SeedTask { title: "Schedule technical review meeting", due_in_days: 2, completed: false, company: 2, contact: 4, deal: Some(2) },
    SeedTask { title: "Update analytics requirements document", due_in_days: -4, completed: false, company: 4, contact: 8, deal: Some(4) },
    SeedTask { title: "Conduct initial discovery call", due_in_days: -7, completed: true, company: 1, contact: 2, deal: Some(1) },
    SeedTask { title: "Research competitor solutions for education sector", due_in_days: 8, completed: false, company: 7, contact: 14, deal: None },
    SeedTask { title: "Schedule executive stakeholder meeting", due_in_days: 6, completed: false, company: 1, contact: 3, deal: Some(1) },
];

/// Counts of rows written by [`seed_demo`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub companies: usize,
    pub contacts: usize,
    pub deals: usize,
    pub tasks: usize,
}

/// Deal status implied by a pipeline stage.
fn status_for_stage(stage: usize) -> DealStatus {
    match STAGES.get(stage).copied() {
        Some("Closed Won") => DealStatus::Won,
        Some("Closed Lost") => DealStatus::Lost,
        _ => DealStatus::Open,
    }
}

/// Seed demo data owned by the development account.
///
/// Returns `None` when the account already owns a team.
pub async fn seed_demo(pool: &PgPool, auth: &AuthConfig) -> AppResult<Option<SeedSummary>> {
    let user_id = auth.dev_user_id;

    let seeded =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM teams WHERE owner_id = $1)")
            .bind(user_id)
            .fetch_one(pool)
            .await
            .map_err(db_error("Failed to check demo team"))?;

    if seeded {
        info!(user_id = %user_id, "Demo data already present");
        return Ok(None);
    }

    let mut tx = pool
        .begin()
        .await
        .map_err(db_error("Failed to begin seed transaction"))?;

    sqlx::query(
        "INSERT INTO users (id, email, name, role_id) \
         VALUES ($1, $2, $3, (SELECT id FROM roles WHERE name = 'ADMIN')) \
         ON CONFLICT DO NOTHING",
    )
    .bind(user_id)
    .bind(&auth.dev_email)
    .bind(&auth.dev_name)
    .execute(&mut *tx)
    .await
    .map_err(db_error("Failed to seed development user"))?;

    let team_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO teams (name, owner_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(TEAM_NAME)
    .bind(user_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(db_error("Failed to seed team"))?;

    sqlx::query("INSERT INTO team_memberships (team_id, user_id, role) VALUES ($1, $2, $3)")
        .bind(team_id)
        .bind(user_id)
        .bind(MemberRole::Admin)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to seed team membership"))?;

    let pipeline_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO pipelines (name, team_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(PIPELINE_NAME)
    .bind(team_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(db_error("Failed to seed pipeline"))?;

    let mut stage_ids = Vec::with_capacity(STAGES.len());
    for (position, name) in (1i32..).zip(STAGES) {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO stages (name, position, pipeline_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(position)
        .bind(pipeline_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to seed stage"))?;
        stage_ids.push(id);
    }

    let mut company_ids = Vec::with_capacity(COMPANIES.len());
    for company in &COMPANIES {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO companies (name, domain, industry, team_id, owner_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(company.name)
        .bind(company.domain)
        .bind(company.industry)
        .bind(team_id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to seed company"))?;
        company_ids.push(id);
    }

    let mut contact_ids = Vec::with_capacity(CONTACTS.len());
    for contact in &CONTACTS {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO contacts \
             (first_name, last_name, email, phone, job_title, company_id, team_id, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
        )
        .bind(contact.first_name)
        .bind(contact.last_name)
        .bind(contact.email)
        .bind(contact.phone)
        .bind(contact.job_title)
        .bind(company_ids[contact.company])
        .bind(team_id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to seed contact"))?;
        contact_ids.push(id);
    }

    let mut deal_ids = Vec::with_capacity(DEALS.len());
    for deal in &DEALS {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO deals \
             (title, amount, status, close_date, company_id, contact_id, stage_id, team_id) \
             VALUES ($1, $2, $3, date_trunc('day', NOW()) + make_interval(days => $4), \
                     $5, $6, $7, $8) \
             RETURNING id",
        )
        .bind(deal.title)
        .bind(deal.amount)
        .bind(status_for_stage(deal.stage))
        .bind(deal.close_in_days)
        .bind(company_ids[deal.company])
        .bind(contact_ids[deal.contact])
        .bind(stage_ids[deal.stage])
        .bind(team_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to seed deal"))?;
        deal_ids.push(id);
    }

    for task in &TASKS {
        sqlx::query(
            "INSERT INTO tasks \
             (title, due_at, completed_at, company_id, contact_id, deal_id, owner_id) \
             VALUES ($1, NOW() + make_interval(days => $2), \
                     CASE WHEN $3 THEN NOW() + make_interval(days => $2) END, \
                     $4, $5, $6, $7)",
        )
        .bind(task.title)
        .bind(task.due_in_days)
        .bind(task.completed)
        .bind(company_ids[task.company])
        .bind(contact_ids[task.contact])
        .bind(task.deal.map(|i| deal_ids[i]))
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to seed task"))?;
    }

    tx.commit()
        .await
        .map_err(db_error("Failed to commit seed transaction"))?;

    let summary = SeedSummary {
        companies: company_ids.len(),
        contacts: contact_ids.len(),
        deals: deal_ids.len(),
        tasks: TASKS.len(),
    };

    info!(
        user_id = %user_id,
        team_id = %team_id,
        companies = summary.companies,
        contacts = summary.contacts,
        deals = summary.deals,
        tasks = summary.tasks,
        "Demo data seeded"
    );

    Ok(Some(summary))
}
