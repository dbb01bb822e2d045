//! Workflow execution traits

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::error::DispatchError;
use super::request::{ExecutionRequest, WorkflowRequest};
use crate::domain::DomainError;

/// Client side of the executor boundary: submit a workflow and a query,
/// wait for a single reply.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WorkflowDispatcher: Send + Sync {
    async fn dispatch(&self, request: &ExecutionRequest) -> Result<String, DispatchError>;
}

/// Server side of the executor boundary: run a workflow for one query
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WorkflowExecutor: Send + Sync {
    async fn execute(&self, workflow: &WorkflowRequest, query: &str)
        -> Result<String, DomainError>;
}
