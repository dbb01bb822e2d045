//! Workflow domain module
//!
//! Turns a canvas graph into something that can be run:
//! - Validation of the query → (knowledge base) → LLM → output shape
//! - Serialization of the graph into an execution request
//! - The dispatcher/executor traits on either side of the HTTP boundary

mod error;
mod executor;
mod request;
mod serializer;
mod validator;

pub use error::{DispatchError, ValidationError};
pub use executor::{WorkflowDispatcher, WorkflowExecutor};
#[cfg(test)]
pub use executor::{MockWorkflowDispatcher, MockWorkflowExecutor};
pub use request::{
    ExecutionRequest, ExecutionResponse, WorkflowEdge, WorkflowNode, WorkflowRequest,
};
pub use serializer::{serialize, DEFAULT_WORKFLOW_NAME};
pub use validator::{validate, VALID_WORKFLOW_MESSAGE};
