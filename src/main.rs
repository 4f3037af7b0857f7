use anyhow::{Context, Result};
use clap::Parser;
use mcp_tf_provider_docs::config::{CONFIG_ENV, Config};
use mcp_tf_provider_docs::indexer::{Indexer, TokenExtractor};
use mcp_tf_provider_docs::mcp::server::{McpContext, McpServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Serve Terraform/OpenTofu provider documentation over MCP (stdio).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the YAML config file (docs_path, match_pattern, tool_description)
    #[arg(short, long, env = CONFIG_ENV)]
    config: PathBuf,
}

// stdout carries the MCP protocol, so logs go to stderr.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    // 1. Load config
    let config = Config::load(&cli.config)?;
    config.validate().context("Invalid configuration")?;

    // 2. Build the index
    let extractor =
        TokenExtractor::new(&config.match_pattern).context("invalid match_pattern regex")?;
    let index = Indexer::new(extractor)
        .build(&config.docs_path)
        .context("Failed to build index")?;

    let stats = index.log_summary();
    if stats.tokens == 0 {
        warn!("No providers found in documentation, exiting.");
        return Ok(());
    }

    // 3. Start Server
    let ctx = McpContext {
        index: Arc::new(index),
        config: Arc::new(config),
    };
    McpServer::new(ctx).start().await
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    info!("Starting mcp-tf-provider-docs...");
    if let Err(e) = run(cli).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}
