//! The boundary between page controllers and the CRM API.

use async_trait::async_trait;
use uuid::Uuid;

use crm_core::AppResult;
use crm_entity::{
    Company, CompanyInput, ContactDetail, ContactInput, DealDetail, DealInput, PipelineWithStages,
    TaskDetail, TaskInput,
};

/// Operations the front end performs against the API.
///
/// Implemented over HTTP by [`HttpGateway`](crate::HttpGateway); tests use
/// an in-memory double.
#[async_trait]
pub trait CrmGateway: Send + Sync {
    async fn list_contacts(&self) -> AppResult<Vec<ContactDetail>>;
    async fn create_contact(&self, input: &ContactInput) -> AppResult<ContactDetail>;
    async fn update_contact(&self, id: Uuid, input: &ContactInput) -> AppResult<ContactDetail>;

    async fn list_companies(&self) -> AppResult<Vec<Company>>;
    async fn create_company(&self, input: &CompanyInput) -> AppResult<Company>;
    async fn update_company(&self, id: Uuid, input: &CompanyInput) -> AppResult<Company>;

    async fn list_deals(&self) -> AppResult<Vec<DealDetail>>;
    async fn create_deal(&self, input: &DealInput) -> AppResult<DealDetail>;
    async fn update_deal(&self, id: Uuid, input: &DealInput) -> AppResult<DealDetail>;
    async fn delete_deal(&self, id: Uuid) -> AppResult<()>;

    async fn list_tasks(&self) -> AppResult<Vec<TaskDetail>>;
    async fn create_task(&self, input: &TaskInput) -> AppResult<TaskDetail>;
    async fn update_task(&self, id: Uuid, input: &TaskInput) -> AppResult<TaskDetail>;

    async fn list_pipelines(&self) -> AppResult<Vec<PipelineWithStages>>;
}
