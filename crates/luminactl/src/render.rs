//! Terminal renderer for the final result.

use lumina_core::graph::Renderer;
use lumina_core::types::HandlerResult;
use owo_colors::OwoColorize;

/// Prints the result text to stdout.
pub struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn render(&mut self, result: &HandlerResult) {
        println!();
        println!("{}  {}", "*".bright_green().bold(), "Final output".bright_white().bold());
        println!("{}", result.text);
    }
}
