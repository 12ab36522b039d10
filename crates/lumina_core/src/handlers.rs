//! Per-intent request handlers.
//!
//! Four handlers delegate to the completion backend with an
//! intent-specific instruction template; `Time` is answered locally from
//! the wall clock. The match over `Intent` is total, so every intent has
//! exactly one handler by construction.

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::classifier::Intent;
use crate::error::DispatchError;
use crate::ollama::CompletionBackend;
use crate::types::{HandlerResult, Request};

/// Strip a literal routing prefix so it does not echo into the downstream
/// prompt. The prefix match is case-sensitive; surrounding whitespace is
/// trimmed either way.
fn strip_prefix_token<'a>(text: &'a str, prefix: &str) -> &'a str {
    let trimmed = text.trim();
    match trimmed.strip_prefix(prefix) {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}

/// Build the backend prompt for a delegating intent.
///
/// Returns `None` for `Time`, which never delegates. `Math` and
/// `Fallback` pass the raw text unchanged.
pub fn prompt_for(intent: Intent, text: &str) -> Option<String> {
    match intent {
        Intent::Summarize => Some(format!(
            "Summarize this in 2 lines: {}",
            strip_prefix_token(text, "summarize:")
        )),
        Intent::Math => Some(format!("Solve this step-by-step: {}", text)),
        Intent::Translate => Some(format!(
            "Translate this to Hindi: {}",
            strip_prefix_token(text, "translate:")
        )),
        Intent::Fallback => Some(format!("Respond to this general query: {}", text)),
        Intent::Time => None,
    }
}

/// Format a wall-clock instant as e.g. "Friday, 28 August 2026 at 3:45 PM".
pub fn format_timestamp(now: NaiveDateTime) -> String {
    now.format("%A, %-d %B %Y at %-I:%M %p").to_string()
}

/// Invoke the handler registered for `intent`.
///
/// Backend failure propagates tagged with the triggering intent; the
/// current invocation is over at that point.
pub async fn handle<B: CompletionBackend>(
    intent: Intent,
    request: &Request,
    backend: &B,
) -> Result<HandlerResult, DispatchError> {
    let text = match prompt_for(intent, request.text()) {
        Some(prompt) => {
            debug!("{} handler delegating to completion backend", intent);
            backend
                .complete(&prompt)
                .await
                .map_err(|source| DispatchError { intent, source })?
        }
        // Time ignores the request payload and reads only the clock.
        None => {
            debug!("time handler answering locally");
            format_timestamp(Local::now().naive_local())
        }
    };

    Ok(HandlerResult { text })
}
