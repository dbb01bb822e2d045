//! Executor dispatch over HTTP

mod http;

pub use http::{HttpWorkflowDispatcher, RUN_WORKFLOW_PATH};
