//! Node and edge types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-form node configuration, keyed by field name
pub type NodeConfig = serde_json::Map<String, serde_json::Value>;

/// Identifier of a node within one graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Structural slot of a node on the canvas (where it may connect)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Source-only node
    Input,
    /// Node with both incoming and outgoing connections
    Default,
    /// Sink-only node
    Output,
}

/// Semantic role of a node in the pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeLabel {
    #[serde(rename = "User Query")]
    UserQuery,
    #[serde(rename = "KnowledgeBase")]
    KnowledgeBase,
    #[serde(rename = "LLM Engine")]
    LlmEngine,
    #[serde(rename = "Output")]
    Output,
}

impl NodeLabel {
    /// Every label offered by the node library, in palette order
    pub const ALL: [NodeLabel; 4] = [
        NodeLabel::UserQuery,
        NodeLabel::KnowledgeBase,
        NodeLabel::LlmEngine,
        NodeLabel::Output,
    ];

    /// Display name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserQuery => "User Query",
            Self::KnowledgeBase => "KnowledgeBase",
            Self::LlmEngine => "LLM Engine",
            Self::Output => "Output",
        }
    }

    /// Structural kind the node library assigns to this label
    pub fn default_kind(&self) -> NodeKind {
        match self {
            Self::UserQuery => NodeKind::Input,
            Self::KnowledgeBase | Self::LlmEngine => NodeKind::Default,
            Self::Output => NodeKind::Output,
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canvas coordinates. Presentation only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node on the canvas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    id: NodeId,

    #[serde(rename = "type")]
    kind: NodeKind,

    label: NodeLabel,

    #[serde(default)]
    position: Position,

    #[serde(default)]
    config: NodeConfig,
}

impl Node {
    /// Create a node with an empty configuration
    pub fn new(id: NodeId, kind: NodeKind, label: NodeLabel, position: Position) -> Self {
        Self {
            id,
            kind,
            label,
            position,
            config: NodeConfig::new(),
        }
    }

    pub fn with_config(mut self, config: NodeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> NodeLabel {
        self.label
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub(super) fn set_config(&mut self, config: NodeConfig) {
        self.config = config;
    }

    pub(super) fn set_config_field(&mut self, field: impl Into<String>, value: serde_json::Value) {
        self.config.insert(field.into(), value);
    }
}

/// Directed connection between two nodes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
