use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bookr::catalog::{CatalogClient, HttpCatalogClient, HttpCatalogConfig};
use bookr::cli::Cli;
use bookr::cli::commands::Commands;
use bookr::config::Config;
use bookr::server::McpServer;
use bookr::tools::ToolRegistry;

fn setup_logging() -> Result<()> {
    // Create log directory - stdout carries the MCP protocol, so logs must
    // go to a file
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("bookr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn build_catalog_client(config: &Config) -> Result<Arc<dyn CatalogClient>> {
    let client = HttpCatalogClient::new(HttpCatalogConfig {
        base_url: config.catalog.base_url.clone(),
        timeout: Duration::from_millis(config.catalog.timeout_ms),
    })
    .context("Failed to create catalog client")?;

    Ok(Arc::new(client))
}

async fn run_serve(config: &Config) -> Result<()> {
    info!("Starting MCP server for catalog at {}", config.catalog.base_url);

    let client = build_catalog_client(config)?;
    let registry = ToolRegistry::standard(client);
    let server = McpServer::new(config.server.name.clone(), registry);

    server.run().await.context("Server failed")?;
    Ok(())
}

fn run_tools(config: &Config) -> Result<()> {
    let client = build_catalog_client(config)?;
    let registry = ToolRegistry::standard(client);

    let mut definitions = registry.definitions();
    definitions.sort_by(|a, b| a.name.cmp(&b.name));

    for def in definitions {
        println!("{}", def.name.green().bold());
        println!("  {}", def.description);
        let schema = serde_json::to_string_pretty(&def.input_schema)?;
        for line in schema.lines() {
            println!("  {}", line.dimmed());
        }
        println!();
    }
    Ok(())
}

async fn run_check(config: &Config) -> Result<()> {
    info!("Checking catalog at {}", config.catalog.base_url);
    println!("{} {}", "Checking catalog:".cyan(), config.catalog.base_url);

    let client = build_catalog_client(config)?;
    match client.list_books().await {
        Ok(books) => {
            println!("{} {} book(s) listed", "OK:".green(), books.len());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "Unreachable:".red(), e);
            Err(eyre::eyre!("catalog check failed: {}", e))
        }
    }
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        // Default: serve over stdio
        None | Some(Commands::Serve) => run_serve(config).await,
        Some(Commands::Tools) => run_tools(config),
        Some(Commands::Check) => run_check(config).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
