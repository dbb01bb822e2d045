//! Workflow execution endpoint

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{ExecutionRequest, ExecutionResponse};

/// POST /api/run-workflow
pub async fn run_workflow(
    State(state): State<AppState>,
    Json(request): Json<ExecutionRequest>,
) -> Result<Json<ExecutionResponse>, ApiError> {
    debug!(
        workflow = %request.workflow.name,
        nodes = request.workflow.nodes.len(),
        edges = request.workflow.edges.len(),
        "Running workflow"
    );

    let response = state
        .workflow_service
        .run(&request.workflow, &request.query)
        .await?;

    Ok(Json(ExecutionResponse {
        response,
        workflow_executed: Some(request.workflow),
    }))
}
