//! Document service - upload, indexing and context retrieval

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::knowledge::rank_chunks;
use crate::domain::{
    chunk_text, ChunkingConfig, Document, DocumentChunk, DocumentId, DocumentRepository,
    DomainError, SearchHit,
};

/// File extensions whose content can be read as text
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["txt", "md", "markdown"];

fn supports_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Document service for knowledge base content
#[derive(Debug)]
pub struct DocumentService {
    repository: Arc<dyn DocumentRepository>,
    chunking: ChunkingConfig,
    top_k: usize,
}

impl DocumentService {
    /// Create a new document service
    pub fn new(
        repository: Arc<dyn DocumentRepository>,
        chunking: ChunkingConfig,
        top_k: usize,
    ) -> Self {
        Self {
            repository,
            chunking,
            top_k,
        }
    }

    /// Store an uploaded document without indexing it
    pub async fn upload(&self, filename: &str, content: &str) -> Result<Document, DomainError> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(DomainError::validation("filename cannot be empty"));
        }

        if !supports_file(filename) {
            return Err(DomainError::validation(format!(
                "Only {} files are allowed",
                SUPPORTED_EXTENSIONS.map(|ext| format!(".{}", ext)).join(", ")
            )));
        }

        if content.trim().is_empty() {
            return Err(DomainError::validation("document content cannot be empty"));
        }

        let document = self.repository.save(Document::new(filename, content)).await?;
        info!(document_id = %document.id(), filename = %filename, "Document uploaded");

        Ok(document)
    }

    /// Chunk a stored document and make it searchable. Returns the chunk count.
    pub async fn index(&self, document_id: &str) -> Result<usize, DomainError> {
        let id = DocumentId::parse(document_id)
            .ok_or_else(|| DomainError::validation(format!("Invalid document id '{}'", document_id)))?;

        let document = self
            .repository
            .get(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Document '{}' not found", id)))?;

        let chunks: Vec<DocumentChunk> = chunk_text(document.content(), &self.chunking)?
            .into_iter()
            .enumerate()
            .map(|(index, content)| DocumentChunk {
                document_id: id,
                index,
                content,
            })
            .collect();

        let count = chunks.len();
        self.repository.store_chunks(&id, chunks).await?;
        info!(document_id = %id, chunks = count, "Document indexed");

        Ok(count)
    }

    /// Indexed chunks most relevant to the query, best first
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, DomainError> {
        let chunks = self.repository.all_chunks().await?;
        let hits = rank_chunks(query, chunks, self.top_k);
        debug!(hits = hits.len(), "Context search completed");

        Ok(hits)
    }
}
