//! Graph to execution request conversion

use crate::domain::graph::GraphModel;

use super::request::{WorkflowEdge, WorkflowNode, WorkflowRequest};

/// Name given to workflows built on the canvas
pub const DEFAULT_WORKFLOW_NAME: &str = "Custom Workflow";

/// Convert the graph into an execution payload.
///
/// Performs no validation; node and edge order follow the graph.
pub fn serialize(graph: &GraphModel, name: impl Into<String>) -> WorkflowRequest {
    WorkflowRequest {
        name: name.into(),
        nodes: graph.nodes().iter().map(WorkflowNode::from).collect(),
        edges: graph.edges().iter().map(WorkflowEdge::from).collect(),
    }
}
