//! Chat command - tests a saved canvas against a running executor

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{ChatEntry, ChatRole, GraphModel};
use crate::infrastructure::dispatch::HttpWorkflowDispatcher;
use crate::infrastructure::services::BuilderSession;

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

/// Arguments for the chat command
#[derive(Args, Clone, Debug)]
pub struct ChatArgs {
    /// Canvas file (`{"nodes": [...], "edges": [...]}`)
    pub graph: PathBuf,

    /// Executor base URL (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Workflow name sent with each request (overrides config)
    #[arg(long)]
    pub name: Option<String>,
}

/// Run an interactive chat session on stdin/stdout
pub async fn run(args: ChatArgs) -> anyhow::Result<ExitCode> {
    let config = super::bootstrap();
    let graph = super::read_graph(&args.graph)?;
    let mut session = build_session(graph, args, config)?;

    if let Err(reason) = session.open_chat(Instant::now()) {
        println!("{}", reason);
        return Ok(ExitCode::FAILURE);
    }
    println!("Chat with your workflow. Type /quit to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }

        let seen = session.conversation().entries().len();
        session.send_message(&line).await;

        for entry in &session.conversation().entries()[seen..] {
            if let Some(text) = render_reply(entry) {
                println!("{}", text);
            }
        }
    }

    session.close_chat();
    Ok(ExitCode::SUCCESS)
}

/// Session over `graph`, dispatching to the configured or overridden executor
fn build_session(
    graph: GraphModel,
    args: ChatArgs,
    config: AppConfig,
) -> anyhow::Result<BuilderSession> {
    let timeout = config.executor.timeout();
    let status_clear = config.builder.status_clear();
    let endpoint = args.endpoint.unwrap_or(config.executor.base_url);
    let workflow_name = args.name.unwrap_or(config.builder.workflow_name);

    let dispatcher = HttpWorkflowDispatcher::new(&endpoint, timeout)?;
    let session = BuilderSession::with_graph(graph, Arc::new(dispatcher))
        .with_status_clear(status_clear)
        .with_workflow_name(workflow_name);

    info!(
        endpoint = %endpoint,
        workflow = %session.workflow_name(),
        "Using workflow executor"
    );

    Ok(session)
}

/// The user's own line is already on the terminal
fn render_reply(entry: &ChatEntry) -> Option<String> {
    match entry.role {
        ChatRole::User => None,
        role => Some(format!("{}: {}", role.display_name(), entry.content)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::EXECUTION_FAILURE_MESSAGE;

    fn args(name: Option<&str>) -> ChatArgs {
        ChatArgs {
            graph: PathBuf::from("graph.json"),
            endpoint: Some("http://executor:9000".to_string()),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_build_session_uses_config_name() {
        let session = build_session(GraphModel::new(), args(None), AppConfig::default()).unwrap();
        assert_eq!(session.workflow_name(), "Custom Workflow");
    }

    #[test]
    fn test_build_session_name_override() {
        let mut config = AppConfig::default();
        config.builder.status_clear_ms = 500;

        let session =
            build_session(GraphModel::new(), args(Some("Support Bot")), config).unwrap();
        assert_eq!(session.workflow_name(), "Support Bot");
    }

    #[test]
    fn test_render_reply_skips_user_lines() {
        assert_eq!(render_reply(&ChatEntry::user("hello")), None);
    }

    #[test]
    fn test_render_reply_prefixes_role() {
        let reply = render_reply(&ChatEntry::assistant("hi there")).unwrap();
        assert!(reply.ends_with(": hi there"));

        let error = render_reply(&ChatEntry::error(EXECUTION_FAILURE_MESSAGE)).unwrap();
        assert!(error.ends_with(EXECUTION_FAILURE_MESSAGE));
    }
}
