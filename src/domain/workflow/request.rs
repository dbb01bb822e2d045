//! Execution request payloads

use serde::{Deserialize, Serialize};

use crate::domain::graph::{Edge, GraphModel, Node, NodeConfig, NodeId, NodeLabel, Position};

/// A node as carried in an execution request.
///
/// The semantic label travels as `type`; the structural kind is dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowNode {
    pub id: NodeId,

    #[serde(rename = "type")]
    pub node_type: NodeLabel,

    #[serde(default)]
    pub config: NodeConfig,
}

/// An edge as carried in an execution request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowEdge {
    pub source: NodeId,
    pub target: NodeId,
}

/// Serialized workflow submitted for execution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowRequest {
    pub name: String,

    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,

    #[serde(default)]
    pub edges: Vec<WorkflowEdge>,
}

impl WorkflowRequest {
    /// Number of nodes, reported by the executor as executed steps
    pub fn step_count(&self) -> usize {
        self.nodes.len()
    }

    /// Rebuild a graph so the executor can run the same validation.
    ///
    /// Structural kinds are restored from each label's default.
    pub fn to_graph(&self) -> GraphModel {
        let mut graph = GraphModel::new();

        for node in &self.nodes {
            graph.insert_node(
                Node::new(
                    node.id.clone(),
                    node.node_type.default_kind(),
                    node.node_type,
                    Position::default(),
                )
                .with_config(node.config.clone()),
            );
        }

        for edge in &self.edges {
            graph.add_edge(edge.source.clone(), edge.target.clone());
        }

        graph
    }

    /// Nodes carrying the given label, in request order
    pub fn nodes_with_label(&self, label: NodeLabel) -> impl Iterator<Item = &WorkflowNode> {
        self.nodes.iter().filter(move |n| n.node_type == label)
    }

    /// Whether an edge connects a node of `source` label to one of `target` label
    pub fn connects(&self, source: NodeLabel, target: NodeLabel) -> bool {
        let label_of = |id: &NodeId| {
            self.nodes
                .iter()
                .find(|n| &n.id == id)
                .map(|n| n.node_type)
        };

        self.edges
            .iter()
            .any(|e| label_of(&e.source) == Some(source) && label_of(&e.target) == Some(target))
    }
}

impl From<&Edge> for WorkflowEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            source: edge.source.clone(),
            target: edge.target.clone(),
        }
    }
}

impl From<&Node> for WorkflowNode {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id().clone(),
            node_type: node.label(),
            config: node.config().clone(),
        }
    }
}

/// Body posted to the executor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutionRequest {
    pub workflow: WorkflowRequest,
    pub query: String,
}

impl ExecutionRequest {
    pub fn new(workflow: WorkflowRequest, query: impl Into<String>) -> Self {
        Self {
            workflow,
            query: query.into(),
        }
    }
}

/// Body returned by the executor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutionResponse {
    /// Assistant reply text
    pub response: String,

    /// Echo of the workflow that was executed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_executed: Option<WorkflowRequest>,
}
