//! Workflow executor implementation
//!
//! Produces a deterministic reply describing what a real pipeline would do:
//! the retrieved context, the LLM stage's system prompt and the number of
//! steps. No model is called.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::{
    DomainError, LlmEngineSettings, NodeLabel, OutputFormat, WorkflowExecutor, WorkflowRequest,
};
use crate::infrastructure::services::DocumentService;

const SIMULATED_ANSWER: &str = "This is a simulated LLM response. In a real implementation, \
this would call an LLM API with the query and retrieved context to generate a meaningful \
answer based on the workflow configuration.";

const NO_CONTEXT: &str = "(no indexed context matched the query)";

/// What the pipeline resolved before "calling" the model
#[derive(Debug)]
struct Run<'a> {
    workflow: &'a WorkflowRequest,
    query: &'a str,
    settings: LlmEngineSettings,
    context: Option<Vec<String>>,
    format: OutputFormat,
}

/// Simulated workflow executor
#[derive(Debug)]
pub struct WorkflowExecutorImpl {
    documents: Arc<DocumentService>,
}

impl WorkflowExecutorImpl {
    /// Create a new executor retrieving context from `documents`
    pub fn new(documents: Arc<DocumentService>) -> Self {
        Self { documents }
    }

    /// The LLM stage reads context when a KnowledgeBase feeds it or it opts in
    fn uses_context(workflow: &WorkflowRequest, settings: &LlmEngineSettings) -> bool {
        settings.use_context || workflow.connects(NodeLabel::KnowledgeBase, NodeLabel::LlmEngine)
    }

    fn render(run: &Run<'_>) -> Result<String, DomainError> {
        let steps = run.workflow.step_count();

        match run.format {
            OutputFormat::Json => {
                let value = json!({
                    "workflow": run.workflow.name,
                    "query": run.query,
                    "system_prompt": run.settings.prompt,
                    "context": run.context,
                    "steps_executed": steps,
                    "answer": SIMULATED_ANSWER,
                });
                serde_json::to_string_pretty(&value)
                    .map_err(|e| DomainError::internal(format!("Failed to render reply: {}", e)))
            }
            OutputFormat::Text => {
                let mut out = format!(
                    "Workflow '{}' executed successfully.\n\nQuery: {}\n",
                    run.workflow.name, run.query
                );
                if let Some(prompt) = &run.settings.prompt {
                    out.push_str(&format!("\nSystem Prompt: {}\n", prompt));
                }
                if let Some(context) = &run.context {
                    out.push_str(&format!("\nRetrieved Context:\n{}\n", join_context(context)));
                }
                out.push_str(&format!(
                    "\nWorkflow Steps Executed: {}\n\nResponse: {}",
                    steps, SIMULATED_ANSWER
                ));
                Ok(out)
            }
            OutputFormat::Markdown => {
                let mut out = format!(
                    "## Workflow '{}' executed successfully\n\n**Query:** {}\n",
                    run.workflow.name, run.query
                );
                if let Some(prompt) = &run.settings.prompt {
                    out.push_str(&format!("\n**System Prompt:** {}\n", prompt));
                }
                if let Some(context) = &run.context {
                    out.push_str("\n### Retrieved Context\n\n");
                    if context.is_empty() {
                        out.push_str(&format!("{}\n", NO_CONTEXT));
                    }
                    for chunk in context {
                        out.push_str(&format!("> {}\n", chunk.replace('\n', " ")));
                    }
                }
                out.push_str(&format!(
                    "\n**Workflow Steps Executed:** {}\n\n{}",
                    steps, SIMULATED_ANSWER
                ));
                Ok(out)
            }
        }
    }
}

fn join_context(context: &[String]) -> String {
    if context.is_empty() {
        NO_CONTEXT.to_string()
    } else {
        context.join("\n")
    }
}

#[async_trait]
impl WorkflowExecutor for WorkflowExecutorImpl {
    async fn execute(
        &self,
        workflow: &WorkflowRequest,
        query: &str,
    ) -> Result<String, DomainError> {
        let settings = workflow
            .nodes_with_label(NodeLabel::LlmEngine)
            .next()
            .map(|n| LlmEngineSettings::from_config(&n.config))
            .unwrap_or_default();

        let format = workflow
            .nodes_with_label(NodeLabel::Output)
            .next()
            .map(|n| OutputFormat::from_config(&n.config))
            .unwrap_or_default();

        let context = if Self::uses_context(workflow, &settings) {
            let hits = self.documents.search(query).await?;
            Some(hits.into_iter().map(|h| h.chunk.content).collect())
        } else {
            None
        };

        debug!(
            workflow = %workflow.name,
            uses_context = context.is_some(),
            format = ?format,
            "Simulating workflow run"
        );

        Self::render(&Run {
            workflow,
            query,
            settings,
            context,
            format,
        })
    }
}
