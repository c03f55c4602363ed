//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod confirmation;
pub mod conversation_logger;
pub mod error;
pub mod progress;
pub mod project_registry;
pub mod qa_gateway;
