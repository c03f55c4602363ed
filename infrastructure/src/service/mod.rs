//! HTTP adapter for the QA service.
//!
//! - [`gateway::HttpRagGateway`] - implements `QaGateway` and `ProjectRegistry`
//! - [`protocol`] - JSON request/response bodies
//! - [`error::ServiceError`] - client construction failures

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::ServiceError;
pub use gateway::HttpRagGateway;
