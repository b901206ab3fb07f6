//! Response DTOs.
//!
//! Collections and single records are wrapped in an object keyed by the
//! entity name, e.g. `{ "contacts": [...] }` and `{ "contact": {...} }`.

use serde::Serialize;

use crm_entity::{Company, ContactDetail, DealDetail, PipelineWithStages, SessionUser, TaskDetail};

#[derive(Debug, Clone, Serialize)]
pub struct ContactsResponse {
    pub contacts: Vec<ContactDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub contact: ContactDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Debug, Clone, Serialize)]
pub struct DealsResponse {
    pub deals: Vec<DealDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<TaskDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub task: TaskDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelinesResponse {
    pub pipelines: Vec<PipelineWithStages>,
}

/// `GET /api/auth/session`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: SessionUser,
}

/// `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /api/health/ready`.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}
