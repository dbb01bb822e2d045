//! In-memory document repository implementation

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Document, DocumentChunk, DocumentId, DocumentRepository, DomainError};

#[derive(Debug, Default)]
struct Inner {
    documents: HashMap<DocumentId, Document>,
    chunks: HashMap<DocumentId, Vec<DocumentChunk>>,
    /// Upload order, so retrieval is stable across runs
    order: Vec<DocumentId>,
}

/// In-memory implementation of DocumentRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryDocumentRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn save(&self, document: Document) -> Result<Document, DomainError> {
        let mut inner = self.inner.write().await;

        if !inner.documents.contains_key(&document.id()) {
            inner.order.push(document.id());
        }
        inner.documents.insert(document.id(), document.clone());

        Ok(document)
    }

    async fn get(&self, id: &DocumentId) -> Result<Option<Document>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.documents.get(id).cloned())
    }

    async fn store_chunks(
        &self,
        id: &DocumentId,
        chunks: Vec<DocumentChunk>,
    ) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;

        if !inner.documents.contains_key(id) {
            return Err(DomainError::not_found(format!("Document '{}' not found", id)));
        }

        inner.chunks.insert(*id, chunks);
        Ok(())
    }

    async fn all_chunks(&self) -> Result<Vec<DocumentChunk>, DomainError> {
        let inner = self.inner.read().await;

        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.chunks.get(id))
            .flatten()
            .cloned()
            .collect())
    }
}
