// file: src/cli/mod.rs
// version: 1.0.0
// guid: 1e8b5c3f-7d02-4a69-8e41-f3a9d6b0c725

//! Command line interface for the mktcpip agent

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
