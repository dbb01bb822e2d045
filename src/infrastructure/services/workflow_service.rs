//! Workflow service - validation and execution of submitted workflows

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{validate, DomainError, WorkflowExecutor, WorkflowRequest};

/// Workflow service backing the run endpoint
pub struct WorkflowService {
    executor: Arc<dyn WorkflowExecutor>,
}

impl std::fmt::Debug for WorkflowService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowService").finish()
    }
}

impl WorkflowService {
    /// Create a new workflow service
    pub fn new(executor: Arc<dyn WorkflowExecutor>) -> Self {
        Self { executor }
    }

    /// Validate the submitted graph, then run it for one query
    pub async fn run(&self, workflow: &WorkflowRequest, query: &str) -> Result<String, DomainError> {
        if let Err(reason) = validate(&workflow.to_graph()) {
            warn!(workflow = %workflow.name, reason = %reason, "Rejected invalid workflow");
            return Err(DomainError::validation(reason.to_string()));
        }

        let reply = self.executor.execute(workflow, query).await?;
        info!(workflow = %workflow.name, steps = workflow.step_count(), "Workflow executed");

        Ok(reply)
    }
}
