//! Graph model

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::GraphError;
use super::id::{NodeIdGenerator, SequentialIdGenerator};
use super::node::{Edge, Node, NodeConfig, NodeId, NodeKind, NodeLabel, Position};

/// Serializable picture of a graph (nodes and edges only, no id counter)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CanvasSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// The authoritative nodes and edges of one workflow in progress
#[derive(Debug)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    ids: Box<dyn NodeIdGenerator>,
}

impl GraphModel {
    /// Create an empty graph with its own sequential id counter
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(SequentialIdGenerator::new()))
    }

    /// Create an empty graph using the given id generator
    pub fn with_id_generator(ids: Box<dyn NodeIdGenerator>) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            ids,
        }
    }

    /// Rebuild a graph from a snapshot. Fresh ids continue after the loaded ones.
    pub fn from_snapshot(snapshot: CanvasSnapshot) -> Self {
        let mut ids = SequentialIdGenerator::new();
        for node in &snapshot.nodes {
            ids.observe(node.id());
        }

        Self {
            nodes: snapshot.nodes,
            edges: snapshot.edges,
            ids: Box::new(ids),
        }
    }

    /// Capture the current nodes and edges
    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Drop a node from the library onto the canvas
    pub fn add_node(&mut self, label: NodeLabel, position: Position) -> Node {
        self.add_node_with_kind(label.default_kind(), label, position)
    }

    /// Add a node with an explicit structural kind
    pub fn add_node_with_kind(
        &mut self,
        kind: NodeKind,
        label: NodeLabel,
        position: Position,
    ) -> Node {
        let node = Node::new(self.ids.next_id(), kind, label, position);
        debug!(node_id = %node.id(), label = %label, "Node added");

        self.nodes.push(node.clone());
        node
    }

    /// Insert an already identified node (used when rebuilding graphs)
    pub(crate) fn insert_node(&mut self, node: Node) {
        self.ids.observe(node.id());
        self.nodes.push(node);
    }

    /// Connect two nodes.
    ///
    /// Accepts any ids, including unknown, duplicate and self-referential ones.
    pub fn add_edge(&mut self, source: impl Into<NodeId>, target: impl Into<NodeId>) {
        let edge = Edge::new(source, target);
        debug!(source = %edge.source, target = %edge.target, "Edge added");
        self.edges.push(edge);
    }

    /// Replace the whole configuration of a node
    pub fn update_node_config(
        &mut self,
        node_id: &NodeId,
        config: NodeConfig,
    ) -> Result<(), GraphError> {
        let node = self.node_mut(node_id)?;
        node.set_config(config);
        Ok(())
    }

    /// Set a single configuration field, keeping the others
    pub fn set_config_field(
        &mut self,
        node_id: &NodeId,
        field: impl Into<String>,
        value: serde_json::Value,
    ) -> Result<(), GraphError> {
        let node = self.node_mut(node_id)?;
        node.set_config_field(field, value);
        Ok(())
    }

    /// Look up a node by id
    pub fn select_node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == node_id)
    }

    /// Label of the node with this id, if it exists
    pub fn label_of(&self, node_id: &NodeId) -> Option<NodeLabel> {
        self.select_node(node_id).map(Node::label)
    }

    /// Whether any node carries the given label
    pub fn has_label(&self, label: NodeLabel) -> bool {
        self.nodes.iter().any(|n| n.label() == label)
    }

    /// Remove every node and edge. The id counter keeps running.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_mut(&mut self, node_id: &NodeId) -> Result<&mut Node, GraphError> {
        self.nodes
            .iter_mut()
            .find(|n| n.id() == node_id)
            .ok_or_else(|| GraphError::node_not_found(node_id.as_str()))
    }
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::new()
    }
}
