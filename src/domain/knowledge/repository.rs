//! Document repository trait

use async_trait::async_trait;

use super::document::{Document, DocumentChunk, DocumentId};
use crate::domain::DomainError;

/// Persistence for uploaded documents and their indexed chunks
#[async_trait]
pub trait DocumentRepository: Send + Sync + std::fmt::Debug {
    /// Store a newly uploaded document
    async fn save(&self, document: Document) -> Result<Document, DomainError>;

    /// Get a document by ID
    async fn get(&self, id: &DocumentId) -> Result<Option<Document>, DomainError>;

    /// Replace the indexed chunks of a document
    async fn store_chunks(
        &self,
        id: &DocumentId,
        chunks: Vec<DocumentChunk>,
    ) -> Result<(), DomainError>;

    /// All indexed chunks, in document then chunk order
    async fn all_chunks(&self) -> Result<Vec<DocumentChunk>, DomainError>;
}
