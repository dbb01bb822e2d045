//! Graph error types

use thiserror::Error;

/// Errors raised by graph mutations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

impl GraphError {
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound(id.into())
    }
}
