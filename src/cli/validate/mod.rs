//! Validate command - checks a saved canvas

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use tracing::info;

use crate::domain::workflow::VALID_WORKFLOW_MESSAGE;
use crate::domain::{serialize, validate, GraphModel, ValidationError};

/// Arguments for the validate command
#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Canvas file (`{"nodes": [...], "edges": [...]}`)
    pub graph: PathBuf,

    /// Print the execution request the canvas serializes to
    #[arg(long)]
    pub print_request: bool,

    /// Workflow name used in the printed request (overrides config)
    #[arg(long)]
    pub name: Option<String>,
}

/// Run the validate command. Exits non-zero for an invalid canvas.
pub async fn run(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let config = super::bootstrap();
    let graph = super::read_graph(&args.graph)?;
    let name = args.name.unwrap_or(config.builder.workflow_name);

    info!(
        path = %args.graph.display(),
        nodes = graph.node_count(),
        edges = graph.edges().len(),
        "Validating canvas"
    );

    let outcome = validate(&graph);
    println!("{}", render_report(&graph, &name, outcome, args.print_request)?);

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Status line, followed by the pretty-printed request when asked for one
fn render_report(
    graph: &GraphModel,
    name: &str,
    outcome: Result<(), ValidationError>,
    print_request: bool,
) -> anyhow::Result<String> {
    let mut report = status_line(outcome);

    if print_request {
        let request = serialize(graph, name);
        report.push('\n');
        report.push_str(&serde_json::to_string_pretty(&request)?);
    }

    Ok(report)
}

fn status_line(result: Result<(), ValidationError>) -> String {
    match result {
        Ok(()) => VALID_WORKFLOW_MESSAGE.to_string(),
        Err(reason) => reason.to_string(),
    }
}
