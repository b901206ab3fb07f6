//! In-memory gateway and record builders for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crm_core::{AppError, AppResult};
use crm_entity::{
    Company, CompanyInput, Contact, ContactDetail, ContactInput, Deal, DealDetail, DealInput,
    DealStatus, PipelineWithStages, Task, TaskDetail, TaskInput,
};

use crate::gateway::CrmGateway;

#[derive(Default)]
pub struct MockGateway {
    pub contacts: Vec<ContactDetail>,
    pub companies: Vec<Company>,
    pub deals: Vec<DealDetail>,
    pub tasks: Vec<TaskDetail>,
    pub(crate) fail: bool,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl MockGateway {
    /// Every call fails as if the API were down.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> AppResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            Err(AppError::external_service("CRM API request failed"))
        } else {
            Ok(())
        }
    }
}

pub fn contact(first: &str, last: &str, created_at: DateTime<Utc>) -> ContactDetail {
    ContactDetail::new(
        Contact {
            id: Uuid::new_v4(),
            first_name: first.into(),
            last_name: last.into(),
            email: None,
            phone: None,
            job_title: None,
            company_id: None,
            team_id: Uuid::nil(),
            owner_id: None,
            created_at,
            updated_at: created_at,
        },
        None,
    )
}

pub fn company(name: &str) -> Company {
    company_created(name, Utc::now())
}

pub fn company_created(name: &str, created_at: DateTime<Utc>) -> Company {
    Company {
        id: Uuid::new_v4(),
        name: name.into(),
        industry: None,
        domain: None,
        website: None,
        email: None,
        phone: None,
        address: None,
        city: None,
        state: None,
        zip_code: None,
        country: None,
        employees: None,
        revenue: None,
        notes: None,
        team_id: Uuid::nil(),
        owner_id: None,
        created_at,
        updated_at: created_at,
    }
}

pub fn deal(title: &str, amount: f64, status: DealStatus) -> DealDetail {
    let now = Utc::now();
    DealDetail {
        deal: Deal {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            status,
            close_date: None,
            company_id: None,
            contact_id: None,
            stage_id: None,
            team_id: Uuid::nil(),
            created_at: now,
            updated_at: now,
        },
        company: None,
        contact: None,
        stage: None,
    }
}

pub fn task(
    title: &str,
    due_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
) -> TaskDetail {
    let now = Utc::now();
    TaskDetail {
        task: Task {
            id: Uuid::new_v4(),
            title: title.into(),
            due_at,
            completed_at,
            company_id: None,
            contact_id: None,
            deal_id: None,
            owner_id: Uuid::nil(),
            created_at: now,
            updated_at: now,
        },
        company: None,
        contact: None,
        deal: None,
    }
}

#[async_trait]
impl CrmGateway for MockGateway {
    async fn list_contacts(&self) -> AppResult<Vec<ContactDetail>> {
        self.record("list_contacts".into())?;
        Ok(self.contacts.clone())
    }

    async fn create_contact(&self, input: &ContactInput) -> AppResult<ContactDetail> {
        self.record("create_contact".into())?;
        Ok(contact(&input.first_name, &input.last_name, Utc::now()))
    }

    async fn update_contact(&self, id: Uuid, input: &ContactInput) -> AppResult<ContactDetail> {
        self.record(format!("update_contact:{id}"))?;
        let mut updated = contact(&input.first_name, &input.last_name, Utc::now());
        updated.contact.id = id;
        Ok(updated)
    }

    async fn list_companies(&self) -> AppResult<Vec<Company>> {
        self.record("list_companies".into())?;
        Ok(self.companies.clone())
    }

    async fn create_company(&self, input: &CompanyInput) -> AppResult<Company> {
        self.record("create_company".into())?;
        Ok(company(&input.name))
    }

    async fn update_company(&self, id: Uuid, input: &CompanyInput) -> AppResult<Company> {
        self.record(format!("update_company:{id}"))?;
        Ok(Company {
            id,
            ..company(&input.name)
        })
    }

    async fn list_deals(&self) -> AppResult<Vec<DealDetail>> {
        self.record("list_deals".into())?;
        Ok(self.deals.clone())
    }

    async fn create_deal(&self, input: &DealInput) -> AppResult<DealDetail> {
        self.record("create_deal".into())?;
        Ok(deal(&input.title, 0.0, DealStatus::Open))
    }

    async fn update_deal(&self, id: Uuid, input: &DealInput) -> AppResult<DealDetail> {
        self.record(format!("update_deal:{id}"))?;
        let mut updated = deal(&input.title, 0.0, DealStatus::Open);
        updated.deal.id = id;
        Ok(updated)
    }

    async fn delete_deal(&self, id: Uuid) -> AppResult<()> {
        self.record(format!("delete_deal:{id}"))
    }

    async fn list_tasks(&self) -> AppResult<Vec<TaskDetail>> {
        self.record("list_tasks".into())?;
        Ok(self.tasks.clone())
    }

    async fn create_task(&self, input: &TaskInput) -> AppResult<TaskDetail> {
        self.record("create_task".into())?;
        Ok(task(&input.title, input.due_at, input.completed_at))
    }

    async fn update_task(&self, id: Uuid, input: &TaskInput) -> AppResult<TaskDetail> {
        self.record(format!("update_task:{id}"))?;
        let mut updated = task(&input.title, input.due_at, input.completed_at);
        updated.task.id = id;
        Ok(updated)
    }

    async fn list_pipelines(&self) -> AppResult<Vec<PipelineWithStages>> {
        self.record("list_pipelines".into())?;
        Ok(Vec::new())
    }
}
