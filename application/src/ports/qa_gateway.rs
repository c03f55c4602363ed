//! QA Gateway port
//!
//! Defines the interface for asking the remote question-answering service.

use super::error::GatewayError;
use async_trait::async_trait;
use ragchat_domain::SourceDocument;

/// A question scoped to one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
    pub project: String,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            project: project.into(),
        }
    }
}

/// The service's answer together with the document it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaAnswer {
    pub answer: String,
    pub source_document: Option<SourceDocument>,
}

/// Gateway for question answering
///
/// Implementations (adapters) live in the infrastructure layer. Each call is
/// a single request/response exchange; implementations must not retry.
#[async_trait]
pub trait QaGateway: Send + Sync {
    /// Ask one question and wait for the answer
    async fn ask(&self, request: &AskRequest) -> Result<QaAnswer, GatewayError>;
}
