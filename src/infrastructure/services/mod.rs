//! Infrastructure services

mod builder_session;
mod document_service;
mod workflow_service;

pub use builder_session::{BuilderSession, SendOutcome};
pub use document_service::DocumentService;
pub use workflow_service::WorkflowService;
