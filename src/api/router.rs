use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::documents;
use super::health;
use super::state::AppState;
use super::workflow;

/// Create the executor router with application state
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/run-workflow", post(workflow::run_workflow))
        .route("/upload-doc", post(documents::upload_document))
        .route("/index-doc", post(documents::index_document));

    Router::new()
        .route("/live", get(health::live_check))
        .nest("/api", api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::AppConfig;

    fn app() -> Router {
        create_router(crate::create_app_state(&AppConfig::default()))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const BOUNDARY: &str = "rag-workflow-boundary";

    async fn upload(app: Router, field: &str, filename: &str, content: &str) -> (StatusCode, Value) {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload-doc")
                    .header(
                        CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn valid_workflow() -> Value {
        json!({
            "name": "Custom Workflow",
            "nodes": [
                {"id": "node_0", "type": "User Query", "config": {}},
                {"id": "node_1", "type": "KnowledgeBase", "config": {}},
                {"id": "node_2", "type": "LLM Engine", "config": {"useContext": true}},
                {"id": "node_3", "type": "Output", "config": {}}
            ],
            "edges": [
                {"source": "node_0", "target": "node_1"},
                {"source": "node_2", "target": "node_3"}
            ]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_run_workflow() {
        let (status, body) = post_json(
            app(),
            "/api/run-workflow",
            json!({"workflow": valid_workflow(), "query": "What is in my documents?"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let reply = body["response"].as_str().unwrap();
        assert!(reply.contains("Workflow 'Custom Workflow' executed successfully."));
        assert!(reply.contains("Workflow Steps Executed: 4"));
        assert_eq!(body["workflow_executed"], valid_workflow());
    }

    #[tokio::test]
    async fn test_run_invalid_workflow() {
        let mut workflow = valid_workflow();
        workflow["edges"] = json!([]);

        let (status, body) = post_json(
            app(),
            "/api/run-workflow",
            json!({"workflow": workflow, "query": "hi"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Connect \"User Query\" to \"KnowledgeBase\" or \"LLM Engine\""
        );
        assert_eq!(body["error"]["type"], "invalid_request_error");
    }

    #[tokio::test]
    async fn test_run_workflow_missing_query() {
        let (status, body) = post_json(
            app(),
            "/api/run-workflow",
            json!({"workflow": valid_workflow()}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_upload_index_and_run_with_context() {
        let app = app();

        let (status, uploaded) = upload(
            app.clone(),
            "file",
            "policy.txt",
            "Refunds take five business days.",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(uploaded["message"], "Document uploaded successfully");
        assert_eq!(uploaded["filename"], "policy.txt");

        let document_id = uploaded["document_id"].as_str().unwrap().to_string();
        let (status, indexed) = post_json(
            app.clone(),
            "/api/index-doc",
            json!({"document_id": document_id}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(indexed["chunks_indexed"], 1);
        assert_eq!(indexed["document_id"], document_id.as_str());

        let (status, body) = post_json(
            app,
            "/api/run-workflow",
            json!({"workflow": valid_workflow(), "query": "How long do refunds take?"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["response"]
            .as_str()
            .unwrap()
            .contains("Refunds take five business days."));
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_content() {
        let (status, body) = upload(app(), "file", "empty.txt", "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "document content cannot be empty");
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_file() {
        let (status, body) = upload(app(), "file", "report.pdf", "%PDF-1.4").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Only .txt, .md, .markdown files are allowed"
        );
    }

    #[tokio::test]
    async fn test_upload_requires_file_field() {
        let (status, body) = upload(app(), "attachment", "notes.txt", "hello").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No file provided");
    }

    #[tokio::test]
    async fn test_index_unknown_document() {
        let (status, body) = post_json(
            app(),
            "/api/index-doc",
            json!({"document_id": "6f1c1b8e-0000-4000-8000-000000000000"}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "not_found_error");
    }
}
