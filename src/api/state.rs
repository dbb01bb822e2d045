//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::{DocumentService, WorkflowService};

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub workflow_service: Arc<WorkflowService>,
    pub document_service: Arc<DocumentService>,
}

impl AppState {
    pub fn new(
        workflow_service: Arc<WorkflowService>,
        document_service: Arc<DocumentService>,
    ) -> Self {
        Self {
            workflow_service,
            document_service,
        }
    }
}
