//! [`TableRow`] implementations for the CRM records.
//!
//! Keys are the camelCase field names used by the JSON API. Linked
//! records show their display name.

use chrono::Utc;

use crm_entity::{Company, ContactDetail, DealDetail, TaskDetail};

use crate::cell::CellValue;
use crate::row::TableRow;

impl TableRow for ContactDetail {
    fn row_id(&self) -> String {
        self.contact.id.to_string()
    }

    fn cell(&self, key: &str) -> CellValue {
        let c = &self.contact;
        match key {
            "name" => self.name.as_str().into(),
            "firstName" => c.first_name.as_str().into(),
            "lastName" => c.last_name.as_str().into(),
            "email" => c.email.clone().into(),
            "phone" => c.phone.clone().into(),
            "jobTitle" => c.job_title.clone().into(),
            "company" => self.company.as_ref().map(|r| r.name.clone()).into(),
            "createdAt" => c.created_at.into(),
            "updatedAt" => c.updated_at.into(),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for Company {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "industry" => self.industry.clone().into(),
            "domain" => self.domain.clone().into(),
            "website" => self.website.clone().into(),
            "email" => self.email.clone().into(),
            "phone" => self.phone.clone().into(),
            "address" => self.address.clone().into(),
            "city" => self.city.clone().into(),
            "state" => self.state.clone().into(),
            "zipCode" => self.zip_code.clone().into(),
            "country" => self.country.clone().into(),
            "location" => self.location().into(),
            "employees" => self.employees.into(),
            "revenue" => self.revenue.into(),
            "notes" => self.notes.clone().into(),
            "createdAt" => self.created_at.into(),
            "updatedAt" => self.updated_at.into(),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for DealDetail {
    fn row_id(&self) -> String {
        self.deal.id.to_string()
    }

    fn cell(&self, key: &str) -> CellValue {
        let d = &self.deal;
        match key {
            "title" => d.title.as_str().into(),
            "amount" => d.amount.into(),
            "status" => d.status.as_str().into(),
            "closeDate" => d.close_date.into(),
            "company" => self.company.as_ref().map(|r| r.name.clone()).into(),
            "contact" => self.contact.as_ref().map(|r| r.full_name()).into(),
            "stage" => self.stage.as_ref().map(|r| r.name.clone()).into(),
            "createdAt" => d.created_at.into(),
            "updatedAt" => d.updated_at.into(),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for TaskDetail {
    fn row_id(&self) -> String {
        self.task.id.to_string()
    }

    fn cell(&self, key: &str) -> CellValue {
        let t = &self.task;
        match key {
            "title" => t.title.as_str().into(),
            "dueAt" => t.due_at.into(),
            "completedAt" => t.completed_at.into(),
            "completed" => t.is_completed().into(),
            "status" => t.status_at(Utc::now()).label().into(),
            "company" => self.company.as_ref().map(|r| r.name.clone()).into(),
            "contact" => self.contact.as_ref().map(|r| r.full_name()).into(),
            "deal" => self.deal.as_ref().map(|r| r.title.clone()).into(),
            "createdAt" => t.created_at.into(),
            _ => CellValue::Empty,
        }
    }
}
