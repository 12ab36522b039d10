//! Value types shared across the dispatch core.

use crate::classifier::Intent;

/// Raw input for one invocation. Created at entry, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    text: String,
}

impl Request {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Output of exactly one handler per invocation.
///
/// The original design carried a "next state" label here as well; every
/// handler set it to the same terminal state, so the graph hardcodes that
/// transition instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResult {
    pub text: String,
}

/// Position in the dispatch graph for one invocation. Transient - lives
/// only until the result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Routing,
    Dispatched(Intent),
    Rendered,
}
