use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::{
    DispatchError, DomainError, ExecutionRequest, ExecutionResponse, WorkflowDispatcher,
};

/// Path of the executor's run endpoint
pub const RUN_WORKFLOW_PATH: &str = "/api/run-workflow";

/// Dispatcher posting `{workflow, query}` to a remote executor with reqwest
#[derive(Debug, Clone)]
pub struct HttpWorkflowDispatcher {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpWorkflowDispatcher {
    /// Build a dispatcher for the executor at `base_url`.
    ///
    /// Every request is bounded by `timeout`; a hung executor surfaces as
    /// [`DispatchError::Timeout`].
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), RUN_WORKFLOW_PATH),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_send_error(&self, error: reqwest::Error) -> DispatchError {
        if error.is_timeout() {
            DispatchError::timeout(timeout_ms(self.timeout))
        } else {
            DispatchError::transport(error.to_string())
        }
    }
}

/// Whole milliseconds, saturating for timeouts beyond `u64::MAX` ms
fn timeout_ms(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl WorkflowDispatcher for HttpWorkflowDispatcher {
    async fn dispatch(&self, request: &ExecutionRequest) -> Result<String, DispatchError> {
        debug!(
            endpoint = %self.endpoint,
            workflow = %request.workflow.name,
            nodes = request.workflow.nodes.len(),
            "Dispatching workflow"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Executor rejected workflow");
            return Err(DispatchError::status(status.as_u16(), body));
        }

        let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;
        let reply: ExecutionResponse = serde_json::from_slice(&body)
            .map_err(|e| DispatchError::malformed_response(e.to_string()))?;

        Ok(reply.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{serialize, GraphModel, NodeLabel, Position};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ExecutionRequest {
        let mut graph = GraphModel::new();
        let query = graph.add_node(NodeLabel::UserQuery, Position::default());
        let llm = graph.add_node(NodeLabel::LlmEngine, Position::default());
        graph.add_edge(query.id().clone(), llm.id().clone());

        ExecutionRequest::new(serialize(&graph, "Custom Workflow"), "What is RAG?")
    }

    fn dispatcher(server: &MockServer) -> HttpWorkflowDispatcher {
        HttpWorkflowDispatcher::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let dispatcher =
            HttpWorkflowDispatcher::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(dispatcher.endpoint(), "http://localhost:8000/api/run-workflow");
    }

    #[test]
    fn test_timeout_ms_saturates() {
        assert_eq!(timeout_ms(Duration::from_millis(1500)), 1500);
        assert_eq!(timeout_ms(Duration::MAX), u64::MAX);
    }

    #[tokio::test]
    async fn test_successful_dispatch() {
        let server = MockServer::start().await;
        let request = request();

        Mock::given(method("POST"))
            .and(path(RUN_WORKFLOW_PATH))
            .and(body_json(json!({
                "workflow": {
                    "name": "Custom Workflow",
                    "nodes": [
                        {"id": "node_0", "type": "User Query", "config": {}},
                        {"id": "node_1", "type": "LLM Engine", "config": {}}
                    ],
                    "edges": [{"source": "node_0", "target": "node_1"}]
                },
                "query": "What is RAG?"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Retrieval augmented generation",
                "workflow_executed": {"name": "Custom Workflow"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = dispatcher(&server).dispatch(&request).await.unwrap();
        assert_eq!(reply, "Retrieval augmented generation");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Workflow failed"))
            .mount(&server)
            .await;

        let err = dispatcher(&server).dispatch(&request()).await.unwrap_err();
        assert_eq!(err, DispatchError::status(500, "Workflow failed"));
    }

    #[tokio::test]
    async fn test_missing_response_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Workflow executed successfully!"})),
            )
            .mount(&server)
            .await;

        let err = dispatcher(&server).dispatch(&request()).await.unwrap_err();
        assert!(matches!(err, DispatchError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_reply_without_echo() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "hi"})))
            .mount(&server)
            .await;

        let reply = dispatcher(&server).dispatch(&request()).await.unwrap();
        assert_eq!(reply, "hi");
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = dispatcher(&server).dispatch(&request()).await.unwrap_err();
        assert!(matches!(err, DispatchError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"response": "late"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let dispatcher =
            HttpWorkflowDispatcher::new(&server.uri(), Duration::from_millis(50)).unwrap();
        let err = dispatcher.dispatch(&request()).await.unwrap_err();
        assert_eq!(err, DispatchError::timeout(50));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let dispatcher =
            HttpWorkflowDispatcher::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();

        let err = dispatcher.dispatch(&request()).await.unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Transport(_) | DispatchError::Timeout { .. }
        ));
    }
}
