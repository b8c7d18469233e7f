// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod dispatch;

pub use args::{Cli, Commands};
