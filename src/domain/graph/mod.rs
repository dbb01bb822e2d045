//! Graph domain module
//!
//! The in-memory workflow graph a user composes on the canvas:
//! - Typed nodes (User Query, KnowledgeBase, LLM Engine, Output)
//! - Directed edges between node ids
//! - Per-node configuration maps edited from the configuration panel
//!
//! Edges are not checked against the node set, and duplicate or
//! self-referential edges are kept as drawn.
//! Structural checks belong to [`crate::domain::workflow::validate`].

mod error;
mod id;
mod model;
mod node;
mod settings;

pub use error::GraphError;
pub use id::{NodeIdGenerator, SequentialIdGenerator, NODE_ID_PREFIX};
pub use model::{CanvasSnapshot, GraphModel};
pub use node::{Edge, Node, NodeConfig, NodeId, NodeKind, NodeLabel, Position};
pub use settings::{LlmEngineSettings, OutputFormat};
