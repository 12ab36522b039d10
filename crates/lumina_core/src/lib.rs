//! Lumina core - single-turn task dispatch.
//!
//! Classifies a free-text request into an intent, routes it through the
//! dispatch graph to the matching handler, and renders the result.

pub mod classifier;
pub mod config;
pub mod error;
pub mod graph;
pub mod handlers;
pub mod ollama;
pub mod types;
