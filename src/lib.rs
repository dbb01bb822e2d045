//! RAG Workflow Builder
//!
//! Compose retrieval-augmented pipelines out of four node roles
//! (User Query, KnowledgeBase, LLM Engine, Output), validate them and run
//! them against a workflow executor:
//! - Graph model and validator for the builder canvas
//! - Serializer producing the execution request payload
//! - HTTP dispatcher and interactive chat session
//! - Executor service with document upload and indexing

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    knowledge::InMemoryDocumentRepository,
    services::{DocumentService, WorkflowService},
    workflow::WorkflowExecutorImpl,
};
use tracing::info;

/// Wire the executor service from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let repository = Arc::new(InMemoryDocumentRepository::new());
    let document_service = Arc::new(DocumentService::new(
        repository,
        config.knowledge.chunking(),
        config.knowledge.top_k,
    ));

    let executor = Arc::new(WorkflowExecutorImpl::new(document_service.clone()));
    let workflow_service = Arc::new(WorkflowService::new(executor));

    info!(
        chunk_size = config.knowledge.chunk_size,
        chunk_overlap = config.knowledge.chunk_overlap,
        top_k = config.knowledge.top_k,
        "Application state initialized"
    );

    AppState::new(workflow_service, document_service)
}
