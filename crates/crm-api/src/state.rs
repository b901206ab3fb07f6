//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use crm_auth::{CredentialVerifier, SessionManager, UserLookup};
use crm_core::config::AppConfig;
use crm_database::DatabasePool;
use crm_database::repositories::{
    CompanyRepository, ContactRepository, DealRepository, PipelineRepository, TaskRepository,
    TeamRepository, UserRepository,
};
use crm_service::{
    CompanyService, ContactService, DealService, PipelineService, TaskService, TeamScope,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabasePool,

    pub session_manager: Arc<SessionManager>,

    pub contact_service: Arc<ContactService>,
    pub company_service: Arc<CompanyService>,
    pub deal_service: Arc<DealService>,
    pub task_service: Arc<TaskService>,
    pub pipeline_service: Arc<PipelineService>,
}

impl AppState {
    /// Wire repositories, services and auth over `db`.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let team_repo = Arc::new(TeamRepository::new(pool.clone()));
        let contact_repo = Arc::new(ContactRepository::new(pool.clone()));
        let company_repo = Arc::new(CompanyRepository::new(pool.clone()));
        let deal_repo = Arc::new(DealRepository::new(pool.clone()));
        let task_repo = Arc::new(TaskRepository::new(pool.clone()));
        let pipeline_repo = Arc::new(PipelineRepository::new(pool));

        let verifier = Arc::new(CredentialVerifier::new(
            user_repo as Arc<dyn UserLookup>,
            config.auth.clone(),
        ));
        let session_manager = Arc::new(SessionManager::new(verifier, &config.auth));

        let scope = TeamScope::new(team_repo);

        let contact_service = Arc::new(ContactService::new(
            Arc::clone(&contact_repo),
            Arc::clone(&company_repo),
            scope.clone(),
        ));
        let company_service = Arc::new(CompanyService::new(
            Arc::clone(&company_repo),
            scope.clone(),
        ));
        let deal_service = Arc::new(DealService::new(
            Arc::clone(&deal_repo),
            Arc::clone(&company_repo),
            Arc::clone(&contact_repo),
            Arc::clone(&pipeline_repo),
            scope.clone(),
        ));
        let task_service = Arc::new(TaskService::new(
            task_repo,
            Arc::clone(&company_repo),
            Arc::clone(&contact_repo),
            Arc::clone(&deal_repo),
            scope.clone(),
        ));
        let pipeline_service = Arc::new(PipelineService::new(pipeline_repo, scope));

        Self {
            config: Arc::new(config),
            db,
            session_manager,
            contact_service,
            company_service,
            deal_service,
            task_service,
            pipeline_service,
        }
    }
}
