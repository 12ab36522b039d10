//! Interactive menu loop.
//!
//! Collects a menu choice and free text, composes the dispatch input, and
//! feeds it to the dispatch graph. Backend failures abort the invocation,
//! not the session.

use anyhow::Result;
use lumina_core::graph::Dispatcher;
use lumina_core::ollama::CompletionBackend;
use lumina_core::types::Request;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

use crate::menu::{compose_input, MenuChoice};
use crate::render::StdoutRenderer;

pub async fn run<B: CompletionBackend>(dispatcher: &Dispatcher<B>) -> Result<()> {
    let mut renderer = StdoutRenderer;

    println!();
    println!("{}", "Welcome to the Lumina assistant".bright_white().bold());

    loop {
        println!();
        println!("{}", "Choose an option:".bright_white());
        println!("   {}  Summarize", "[1]".cyan());
        println!("   {}  Math", "[2]".cyan());
        println!("   {}  Translate", "[3]".cyan());
        println!("   {}  General question", "[4]".cyan());
        println!("   {}  Exit", "[5]".cyan());
        println!();

        let Some(line) = prompt_line("Enter your choice (1-5):")? else {
            // stdin closed; treat like Exit
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            println!("{}  Invalid choice. Please try again.", "x".red().bold());
            continue;
        };

        if choice == MenuChoice::Exit {
            println!("{}", "Goodbye.".dimmed());
            return Ok(());
        }

        let Some(free_text) = prompt_line("Enter your input:")? else {
            return Ok(());
        };

        let request = Request::new(compose_input(choice, &free_text));

        if let Err(e) = dispatcher.run(&request, &mut renderer).await {
            warn!("dispatch failed: {}", e);
            println!();
            println!("{}  {}", "x".red().bold(), e);
            println!("   {}", "The completion backend did not answer; try again.".dimmed());
        }
    }
}

/// Prompt and read one trimmed line. `None` means stdin reached EOF.
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{}  ", prompt.bright_magenta());
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().lock().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
