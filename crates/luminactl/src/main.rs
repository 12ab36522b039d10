//! Lumina Control - CLI for the lumina task dispatcher.
//!
//! Thin I/O wrapper: collects user input and feeds it to the dispatch
//! graph. The completion client is built once here and injected.

use anyhow::Result;
use clap::{Parser, Subcommand};
use lumina_core::config::Config;
use lumina_core::graph::Dispatcher;
use lumina_core::ollama::OllamaClient;
use lumina_core::types::Request;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use luminactl::render::StdoutRenderer;
use luminactl::{repl, selftest};

#[derive(Parser)]
#[command(name = "luminactl")]
#[command(about = "Lumina - single-turn task dispatcher", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu loop (default)
    Repl,

    /// Dispatch a single request and exit
    Ask {
        /// Free-text request
        text: Vec<String>,
    },

    /// Replay the canned scenarios through the dispatcher
    Selftest,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    info!("luminactl v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    let client = OllamaClient::new(&config.ollama);

    if !client.is_available().await {
        warn!("Ollama is not reachable at {}", config.ollama.base_url);
    }

    let dispatcher = Dispatcher::new(client);

    match Cli::parse().command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run(&dispatcher).await,
        Commands::Ask { text } => {
            let request = Request::new(text.join(" "));
            let mut renderer = StdoutRenderer;
            dispatcher.run(&request, &mut renderer).await?;
            Ok(())
        }
        Commands::Selftest => selftest::run(&dispatcher).await,
    }
}
