//! Bookr - an MCP server fronting a remote bookshelf catalog
//!
//! Bookr adapts the Model Context Protocol tool interface onto a REST
//! catalog service: each tool invocation becomes one HTTP call, and the
//! HTTP outcome is rendered back as a text-only tool result.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod tools;

pub use error::{BookrError, Result};
