//! Workflow error types

use thiserror::Error;

use crate::domain::graph::NodeLabel;

/// Reasons a graph is not a runnable workflow.
///
/// The display text is the status message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Add at least one node to the canvas")]
    EmptyGraph,

    #[error("Missing \"{0}\" node")]
    MissingRole(NodeLabel),

    #[error("Connect \"User Query\" to \"KnowledgeBase\" or \"LLM Engine\"")]
    DisconnectedIntake,

    #[error("Connect \"LLM Engine\" to \"Output\"")]
    DisconnectedOutput,
}

/// Failure to obtain a reply from the workflow executor
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Executor returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed executor response: {0}")]
    MalformedResponse(String),

    #[error("Executor did not respond within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl DispatchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    pub fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout { timeout_ms }
    }
}
