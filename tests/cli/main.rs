//! CLI integration tests for mdtext.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (render, parse)
//! - Stdin/stdout handling
//! - Config discovery and validation
//! - Exit codes

mod common;
mod parse;
mod render;
