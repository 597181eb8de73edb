//! CLI module for bookr - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for running the MCP
//! server, listing the declared tools, and checking catalog connectivity.

pub mod commands;

pub use commands::Cli;
