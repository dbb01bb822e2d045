//! Knowledge domain module
//!
//! Documents uploaded for KnowledgeBase nodes, their fixed-size chunking and
//! the store the executor retrieves context from.

mod chunker;
mod document;
pub mod repository;
mod search;

pub use chunker::{chunk_text, ChunkingConfig};
pub use document::{Document, DocumentChunk, DocumentId};
pub use repository::DocumentRepository;
pub use search::{rank_chunks, SearchHit};
