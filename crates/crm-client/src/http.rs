//! [`CrmGateway`] over HTTP with `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crm_core::config::ClientConfig;
use crm_core::types::response::{ApiErrorResponse, SuccessResponse};
use crm_core::{AppError, AppResult, ErrorKind};
use crm_entity::{
    Company, CompanyInput, ContactDetail, ContactInput, DealDetail, DealInput, PipelineWithStages,
    SessionUser, TaskDetail, TaskInput,
};

use crate::gateway::CrmGateway;

/// Session returned by `POST /api/auth/signin`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: SessionUser,
}

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct Contacts {
    contacts: Vec<ContactDetail>,
}

#[derive(Deserialize)]
struct ContactBody {
    contact: ContactDetail,
}

#[derive(Deserialize)]
struct Companies {
    companies: Vec<Company>,
}

#[derive(Deserialize)]
struct CompanyBody {
    company: Company,
}

#[derive(Deserialize)]
struct Deals {
    deals: Vec<DealDetail>,
}

#[derive(Deserialize)]
struct Tasks {
    tasks: Vec<TaskDetail>,
}

#[derive(Deserialize)]
struct TaskBody {
    task: TaskDetail,
}

#[derive(Deserialize)]
struct Pipelines {
    pipelines: Vec<PipelineWithStages>,
}

/// JSON client for the `/api` routes.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpGateway {
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Use an existing bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Sign in and keep the returned token for later requests.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> AppResult<SessionInfo> {
        let session: SessionInfo = self
            .send(
                self.request(Method::POST, "auth/signin")
                    .json(&SignInBody { email, password }),
            )
            .await?;
        info!(user_id = %session.user.id, "Signed in");
        self.token = Some(session.token.clone());
        Ok(session)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "API response");

        if !status.is_success() {
            return Err(error_response(response).await);
        }
        response.json::<T>().await.map_err(transport_error)
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    let message = if err.is_timeout() {
        "CRM API request timed out".to_string()
    } else if err.is_decode() {
        "CRM API returned an unexpected body".to_string()
    } else {
        format!("CRM API request failed: {err}")
    };
    AppError::with_source(ErrorKind::ExternalService, message, err)
}

async fn error_response(response: Response) -> AppError {
    let status = response.status().as_u16();
    match response.bytes().await {
        Ok(body) => error_from_body(status, &body),
        Err(e) => transport_error(e),
    }
}

/// Rebuild the server's error from a non-2xx status and its body.
fn error_from_body(status: u16, body: &[u8]) -> AppError {
    let kind = ErrorKind::from_status(status);
    match serde_json::from_slice::<ApiErrorResponse>(body) {
        Ok(parsed) => {
            let err = AppError::new(kind, parsed.message);
            match parsed.details {
                Some(details) => err.with_details(details),
                None => err,
            }
        }
        Err(_) => AppError::new(kind, format!("CRM API responded with status {status}")),
    }
}

#[async_trait]
impl CrmGateway for HttpGateway {
    async fn list_contacts(&self) -> AppResult<Vec<ContactDetail>> {
        let body: Contacts = self.send(self.request(Method::GET, "contacts")).await?;
        Ok(body.contacts)
    }

    async fn create_contact(&self, input: &ContactInput) -> AppResult<ContactDetail> {
        let body: ContactBody = self
            .send(self.request(Method::POST, "contacts").json(input))
            .await?;
        Ok(body.contact)
    }

    async fn update_contact(&self, id: Uuid, input: &ContactInput) -> AppResult<ContactDetail> {
        let body: ContactBody = self
            .send(self.request(Method::PUT, &format!("contacts/{id}")).json(input))
            .await?;
        Ok(body.contact)
    }

    async fn list_companies(&self) -> AppResult<Vec<Company>> {
        let body: Companies = self.send(self.request(Method::GET, "companies")).await?;
        Ok(body.companies)
    }

    async fn create_company(&self, input: &CompanyInput) -> AppResult<Company> {
        let body: CompanyBody = self
            .send(self.request(Method::POST, "companies").json(input))
            .await?;
        Ok(body.company)
    }

    async fn update_company(&self, id: Uuid, input: &CompanyInput) -> AppResult<Company> {
        let body: CompanyBody = self
            .send(self.request(Method::PUT, &format!("companies/{id}")).json(input))
            .await?;
        Ok(body.company)
    }

    async fn list_deals(&self) -> AppResult<Vec<DealDetail>> {
        let body: Deals = self.send(self.request(Method::GET, "deals")).await?;
        Ok(body.deals)
    }

    async fn create_deal(&self, input: &DealInput) -> AppResult<DealDetail> {
        self.send(self.request(Method::POST, "deals").json(input))
            .await
    }

    async fn update_deal(&self, id: Uuid, input: &DealInput) -> AppResult<DealDetail> {
        self.send(self.request(Method::PUT, &format!("deals/{id}")).json(input))
            .await
    }

    async fn delete_deal(&self, id: Uuid) -> AppResult<()> {
        let _: SuccessResponse = self
            .send(self.request(Method::DELETE, &format!("deals/{id}")))
            .await?;
        Ok(())
    }

    async fn list_tasks(&self) -> AppResult<Vec<TaskDetail>> {
        let body: Tasks = self.send(self.request(Method::GET, "tasks")).await?;
        Ok(body.tasks)
    }

    async fn create_task(&self, input: &TaskInput) -> AppResult<TaskDetail> {
        let body: TaskBody = self
            .send(self.request(Method::POST, "tasks").json(input))
            .await?;
        Ok(body.task)
    }

    async fn update_task(&self, id: Uuid, input: &TaskInput) -> AppResult<TaskDetail> {
        let body: TaskBody = self
            .send(self.request(Method::PUT, &format!("tasks/{id}")).json(input))
            .await?;
        Ok(body.task)
    }

    async fn list_pipelines(&self) -> AppResult<Vec<PipelineWithStages>> {
        let body: Pipelines = self.send(self.request(Method::GET, "pipelines")).await?;
        Ok(body.pipelines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base_url: &str) -> HttpGateway {
        HttpGateway::new(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_url_joins_api_prefix() {
        let gw = gateway("http://crm.local:3000/");
        assert_eq!(gw.url("deals/1"), "http://crm.local:3000/api/deals/1");
    }

    #[test]
    fn test_token_is_kept() {
        let gw = gateway("http://crm.local").with_token("abc");
        assert_eq!(gw.token(), Some("abc"));
    }

    #[test]
    fn test_error_body_is_rebuilt() {
        let body = br#"{"error":"VALIDATION_ERROR","message":"Validation failed","details":{"firstName":["First name is required"]}}"#;
        let err = error_from_body(400, body);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Validation failed");
        assert!(err.details.unwrap()["firstName"].is_array());
    }

    #[test]
    fn test_unparseable_error_body_keeps_status() {
        let err = error_from_body(502, b"<html>bad gateway</html>");
        assert_eq!(err.kind, ErrorKind::ExternalService);
        assert!(err.message.contains("502"));
    }
}
