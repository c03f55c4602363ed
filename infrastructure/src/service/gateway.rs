//! reqwest-based gateway for the QA service

use super::error::ServiceError;
use super::protocol::{
    AnswerBody, AskBody, ProjectBody, ProjectListBody, RegisterBody, check_status, decode_body,
};
use crate::config::{FileConfig, FileEndpointsConfig, FileServiceConfig};
use async_trait::async_trait;
use ragchat_application::{
    AskRequest, GatewayError, ProjectRegistry, QaAnswer, QaGateway, RegisteredProject,
};
use ragchat_domain::Project;
use std::time::Duration;
use tracing::debug;

/// User agent sent with every request
const USER_AGENT: &str = concat!("ragchat/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of [`QaGateway`] and [`ProjectRegistry`].
///
/// Every call is one request. Nothing is retried; a timeout applies only
/// when `service.timeout_seconds` is configured.
#[derive(Clone)]
pub struct HttpRagGateway {
    client: reqwest::Client,
    base_url: String,
    endpoints: FileEndpointsConfig,
}

impl HttpRagGateway {
    pub fn new(
        service: &FileServiceConfig,
        endpoints: FileEndpointsConfig,
    ) -> Result<Self, ServiceError> {
        service.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = service.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: service.base_url.trim_end_matches('/').to_string(),
            endpoints,
        })
    }

    pub fn from_config(config: &FileConfig) -> Result<Self, ServiceError> {
        Self::new(&config.service, config.endpoints.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the status with the full body text
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(format!("Failed to read response body: {}", e)))?;
        debug!("HTTP {} ({} bytes)", status, body.len());
        Ok((status, body))
    }
}

#[async_trait]
impl QaGateway for HttpRagGateway {
    async fn ask(&self, request: &AskRequest) -> Result<QaAnswer, GatewayError> {
        let url = self.url(&self.endpoints.answer);
        debug!("POST {} (project {})", url, request.project);

        let body = AskBody {
            user_question: &request.question,
            project_name: &request.project,
        };
        let (status, text) = self.execute(self.client.post(&url).json(&body)).await?;
        let answer: AnswerBody = decode_body(status, &text)?;
        Ok(answer.into_answer())
    }
}

#[async_trait]
impl ProjectRegistry for HttpRagGateway {
    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
        let url = self.url(&self.endpoints.projects);
        debug!("GET {}", url);

        let (status, text) = self.execute(self.client.get(&url)).await?;
        let listing: ProjectListBody = decode_body(status, &text)?;
        Ok(listing.into_projects())
    }

    async fn register_project(
        &self,
        name: &str,
        source_url: &str,
    ) -> Result<RegisteredProject, GatewayError> {
        let url = self.url(&self.endpoints.register);
        debug!("POST {} (project {})", url, name);

        let body = ProjectBody {
            project_name: name,
            spo_url: Some(source_url),
        };
        let (status, text) = self.execute(self.client.post(&url).json(&body)).await?;
        if text.trim().is_empty() {
            check_status(status, &text)?;
            return Ok(RegisteredProject::default());
        }
        let registered: RegisterBody = decode_body(status, &text)?;
        Ok(registered.into())
    }

    async fn delete_project(&self, name: &str) -> Result<(), GatewayError> {
        let url = self.url(&self.endpoints.delete);
        debug!("DELETE {} (project {})", url, name);

        let body = ProjectBody {
            project_name: name,
            spo_url: None,
        };
        let (status, text) = self.execute(self.client.delete(&url).json(&body)).await?;
        check_status(status, &text)
    }
}
