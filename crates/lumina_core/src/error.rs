//! Error types for the dispatch core.

use std::time::Duration;
use thiserror::Error;

use crate::classifier::Intent;

/// Failure talking to the completion backend.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("completion backend unreachable: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("completion request timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("completion backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("completion backend reply was malformed: {0}")]
    Malformed(String),
}

/// Fatal failure for one invocation: the handler for `intent` could not
/// obtain a completion. Propagates to the caller before anything is
/// rendered; no retry, no partial output.
#[derive(Error, Debug)]
#[error("completion service failed while handling a {intent} request")]
pub struct DispatchError {
    pub intent: Intent,
    #[source]
    pub source: CompletionError,
}
