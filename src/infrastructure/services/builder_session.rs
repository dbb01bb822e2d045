//! Builder session - one canvas, its status line and its test chat

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::domain::workflow::VALID_WORKFLOW_MESSAGE;
use crate::domain::{
    serialize, validate, Conversation, ExecutionRequest, GraphModel, StatusBanner,
    ValidationError, WorkflowDispatcher,
};

/// Outcome of [`BuilderSession::send_message`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// A reply was recorded
    Answered,
    /// A single error entry was recorded
    Failed,
    /// Nothing was sent: blank message
    Ignored,
}

/// Everything one user works on: the graph, the build status and the chat.
///
/// Mutating methods take `&mut self`, so a session runs at most one
/// execution request at a time. Dropping a `send_message` future (for example
/// under a timeout) records the failure and leaves the session usable.
pub struct BuilderSession {
    graph: GraphModel,
    conversation: Conversation,
    status: StatusBanner,
    chat_open: bool,
    workflow_name: String,
    dispatcher: Arc<dyn WorkflowDispatcher>,
}

impl std::fmt::Debug for BuilderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderSession")
            .field("graph", &self.graph)
            .field("chat_open", &self.chat_open)
            .field("workflow_name", &self.workflow_name)
            .finish()
    }
}

impl BuilderSession {
    /// Start a session on an empty canvas
    pub fn new(dispatcher: Arc<dyn WorkflowDispatcher>) -> Self {
        Self::with_graph(GraphModel::new(), dispatcher)
    }

    /// Start a session on an existing graph
    pub fn with_graph(graph: GraphModel, dispatcher: Arc<dyn WorkflowDispatcher>) -> Self {
        Self {
            graph,
            conversation: Conversation::new(),
            status: StatusBanner::default(),
            chat_open: false,
            workflow_name: crate::domain::workflow::DEFAULT_WORKFLOW_NAME.to_string(),
            dispatcher,
        }
    }

    pub fn with_workflow_name(mut self, name: impl Into<String>) -> Self {
        self.workflow_name = name.into();
        self
    }

    pub fn with_status_clear(mut self, clear_after: Duration) -> Self {
        self.status = StatusBanner::new(clear_after);
        self
    }

    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    /// Mutable access for the presentation layer (add nodes, edges, config)
    pub fn graph_mut(&mut self) -> &mut GraphModel {
        &mut self.graph
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn status(&self) -> &StatusBanner {
        &self.status
    }

    pub fn is_chat_open(&self) -> bool {
        self.chat_open
    }

    /// Validate the graph and post the result to the status line
    pub fn build_stack(&mut self, now: Instant) -> Result<(), ValidationError> {
        match validate(&self.graph) {
            Ok(()) => {
                self.status.show_success(VALID_WORKFLOW_MESSAGE, now);
                Ok(())
            }
            Err(reason) => {
                debug!(reason = %reason, "Workflow validation failed");
                self.status.show_warning(reason.to_string());
                Err(reason)
            }
        }
    }

    /// Open the chat, but only for a valid graph
    pub fn open_chat(&mut self, now: Instant) -> Result<(), ValidationError> {
        self.build_stack(now)?;
        self.chat_open = true;
        Ok(())
    }

    /// Hide the chat. The conversation is kept.
    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }

    /// Send one message through the current graph and record the result.
    ///
    /// Failures of any kind become a single error entry; input is accepted
    /// again as soon as this returns or is cancelled.
    pub async fn send_message(&mut self, message: &str) -> SendOutcome {
        let Some(pending) = self.conversation.begin(message) else {
            return SendOutcome::Ignored;
        };

        let request = ExecutionRequest::new(serialize(&self.graph, &self.workflow_name), message);

        match self.dispatcher.dispatch(&request).await {
            Ok(reply) => {
                pending.complete(reply);
                SendOutcome::Answered
            }
            Err(e) => {
                warn!(error = %e, "Workflow execution failed");
                pending.fail();
                SendOutcome::Failed
            }
        }
    }
}
