//! Domain layer - Core business logic and entities

pub mod chat;
pub mod error;
pub mod graph;
pub mod knowledge;
pub mod workflow;

pub use chat::{ChatEntry, ChatRole, Conversation, StatusBanner, StatusLevel};
pub use error::DomainError;
pub use graph::{
    CanvasSnapshot, Edge, GraphError, GraphModel, LlmEngineSettings, Node, NodeConfig, NodeId,
    NodeIdGenerator, NodeKind, NodeLabel, OutputFormat, Position, SequentialIdGenerator,
};
pub use knowledge::{
    chunk_text, ChunkingConfig, Document, DocumentChunk, DocumentId, DocumentRepository,
    SearchHit,
};
pub use workflow::{
    serialize, validate, DispatchError, ExecutionRequest, ExecutionResponse, ValidationError,
    WorkflowDispatcher, WorkflowEdge, WorkflowExecutor, WorkflowNode, WorkflowRequest,
};
