//! Dispatch graph - the state machine tying classification to handling.
//!
//! One invocation walks Routing -> Dispatched(intent) -> Rendered exactly
//! once. All intents converge on the same terminal state; there are no
//! cycles and no re-entry. This is deliberately a two-level tree, not a
//! workflow engine.

use tracing::{debug, info};

use crate::classifier::classify;
use crate::error::DispatchError;
use crate::handlers;
use crate::ollama::CompletionBackend;
use crate::types::{DispatchState, HandlerResult, Request};

/// Terminal output collaborator. Invoked exactly once per successful
/// invocation, never on failure.
pub trait Renderer {
    fn render(&mut self, result: &HandlerResult);
}

/// Single-turn dispatcher over an injected completion backend.
///
/// The backend is passed in at construction and shared read-only across
/// invocations; the dispatcher itself holds no per-invocation state.
pub struct Dispatcher<B: CompletionBackend> {
    backend: B,
}

impl<B: CompletionBackend> Dispatcher<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Run one request through the graph and render the result.
    ///
    /// On backend failure the error propagates before the terminal state
    /// is reached and the renderer is never invoked.
    pub async fn run<R: Renderer>(
        &self,
        request: &Request,
        renderer: &mut R,
    ) -> Result<HandlerResult, DispatchError> {
        let mut state = DispatchState::Routing;
        debug!("dispatch state: {:?}", state);

        let intent = classify(request.text());
        state = DispatchState::Dispatched(intent);
        info!("routed to {} handler", intent);
        debug!("dispatch state: {:?}", state);

        let result = handlers::handle(intent, request, &self.backend).await?;

        state = DispatchState::Rendered;
        debug!("dispatch state: {:?}", state);
        renderer.render(&result);

        Ok(result)
    }
}
