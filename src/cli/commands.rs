//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - serve: run the MCP server on stdin/stdout (default)
//! - tools: print the declared tool catalog
//! - check: verify the catalog service is reachable

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookr - MCP server exposing a remote bookshelf catalog as tools
#[derive(Parser, Debug)]
#[command(name = "bookr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server over stdin/stdout
    Serve,

    /// Print the declared tools and their input schemas
    Tools,

    /// Issue one listing call against the catalog to verify connectivity
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args_defaults_to_serve() {
        let cli = Cli::parse_from(["bookr"]);
        assert!(cli.command.is_none());
        assert!(!cli.is_verbose());
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["bookr", "serve"]);
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn test_parse_tools() {
        let cli = Cli::parse_from(["bookr", "tools"]);
        assert!(matches!(cli.command, Some(Commands::Tools)));
    }

    #[test]
    fn test_parse_check_with_config() {
        let cli = Cli::parse_from(["bookr", "check", "--config", "/tmp/bookr.yml"]);
        assert!(matches!(cli.command, Some(Commands::Check)));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/bookr.yml")));
    }

    #[test]
    fn test_parse_verbose_flag() {
        let cli = Cli::parse_from(["bookr", "--verbose", "serve"]);
        assert!(cli.is_verbose());
    }
}
