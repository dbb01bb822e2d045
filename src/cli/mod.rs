//! CLI module for the RAG Workflow Builder
//!
//! Subcommands:
//! - `serve`: run the workflow executor service
//! - `validate`: check a saved canvas and optionally print its request
//! - `chat`: test a saved canvas against a running executor

pub mod chat;
pub mod serve;
pub mod validate;

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::{CanvasSnapshot, GraphModel};
use crate::infrastructure::logging;

/// RAG Workflow Builder - compose, validate and run RAG pipelines
#[derive(Parser)]
#[command(name = "rag-workflow-builder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the workflow executor service
    Serve,

    /// Validate a saved canvas
    Validate(validate::ValidateArgs),

    /// Chat with a saved canvas through a running executor
    Chat(chat::ChatArgs),
}

/// Load `.env`, the layered configuration and the global subscriber
pub(crate) fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig::from(&config));
    config
}

/// Read a canvas saved as `{"nodes": [...], "edges": [...]}`
pub(crate) fn read_graph(path: &Path) -> anyhow::Result<GraphModel> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let snapshot: CanvasSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse canvas {}", path.display()))?;

    Ok(GraphModel::from_snapshot(snapshot))
}
