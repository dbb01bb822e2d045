//! Document upload and indexing endpoints

use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Multipart field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, Serialize)]
pub struct UploadDocResponse {
    pub message: String,
    pub filename: String,
    pub document_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexDocRequest {
    pub document_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexDocResponse {
    pub message: String,
    pub document_id: String,
    pub chunks_indexed: usize,
}

/// POST /api/upload-doc
///
/// Multipart form with a `file` field; the file is stored but not indexed.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadDocResponse>, ApiError> {
    let (filename, content) = read_file_field(&mut multipart).await?;
    debug!(filename = %filename, bytes = content.len(), "Received document upload");

    let document = state.document_service.upload(&filename, &content).await?;

    Ok(Json(UploadDocResponse {
        message: "Document uploaded successfully".to_string(),
        filename: document.filename().to_string(),
        document_id: document.id().to_string(),
    }))
}

/// File name and text of the first `file` field; other fields are skipped
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, String), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field.text().await.map_err(|e| {
            ApiError::bad_request(format!("Failed to read file '{}': {}", filename, e))
        })?;

        return Ok((filename, content));
    }

    Err(ApiError::bad_request("No file provided"))
}

/// POST /api/index-doc
pub async fn index_document(
    State(state): State<AppState>,
    Json(request): Json<IndexDocRequest>,
) -> Result<Json<IndexDocResponse>, ApiError> {
    let chunks_indexed = state.document_service.index(&request.document_id).await?;

    Ok(Json(IndexDocResponse {
        message: "Document indexed successfully".to_string(),
        document_id: request.document_id,
        chunks_indexed,
    }))
}
