//! Batch self-test harness.
//!
//! Replays one canned input per intent through the same dispatch entry
//! point the interactive loop uses, against the configured backend.

use anyhow::Result;
use lumina_core::classifier::classify;
use lumina_core::graph::Dispatcher;
use lumina_core::ollama::CompletionBackend;
use lumina_core::types::Request;
use owo_colors::OwoColorize;
use tracing::error;

use crate::render::StdoutRenderer;

const SCENARIOS: [&str; 5] = [
    "summarize: LangGraph is used for LLM orchestration.",
    "34 + 12 / 2",
    "translate: Good morning, friend.",
    "What is the current time?",
    "Tell me something random about dolphins.",
];

pub async fn run<B: CompletionBackend>(dispatcher: &Dispatcher<B>) -> Result<()> {
    let mut renderer = StdoutRenderer;
    let mut failures = 0;

    for input in SCENARIOS {
        println!();
        println!("{}  {}  {}", ">".cyan().bold(), input, format!("[{}]", classify(input)).dimmed());

        let request = Request::new(input);
        if let Err(e) = dispatcher.run(&request, &mut renderer).await {
            error!("scenario failed: {}", e);
            println!("{}  {}", "x".red().bold(), e);
            failures += 1;
        }
    }

    println!();
    if failures > 0 {
        anyhow::bail!("{} of {} scenarios failed", failures, SCENARIOS.len());
    }
    println!("{}  All {} scenarios passed", "*".bright_green().bold(), SCENARIOS.len());
    Ok(())
}
