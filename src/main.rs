use std::process::ExitCode;

use clap::Parser;
use rag_workflow_builder::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Validate(args) => cli::validate::run(args).await,
        Command::Chat(args) => cli::chat::run(args).await,
    }
}
