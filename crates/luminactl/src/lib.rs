//! luminactl library - exposes modules for testing.

pub mod menu;
pub mod render;
pub mod repl;
pub mod selftest;
