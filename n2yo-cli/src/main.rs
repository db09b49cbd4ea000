use n2yo_cli::command::{Cli, Command};
use n2yo_cli::config::CliConfig;
use n2yo_cli::logging;

use anyhow::Result;
use clap::Parser;
use n2yo_client::N2yoClient;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Needs neither config nor network
    if cli.command == Command::Categories {
        n2yo_cli::print_categories();
        return Ok(());
    }

    // Load configuration
    let config = CliConfig::load(cli.config.as_deref())?;

    // Initialize logging
    let _logging_guard = logging::init_logging(
        &config.log_level,
        config.log_dir.as_deref().map(Path::new),
    )?;

    if config.api_key.is_empty() {
        tracing::warn!("No API key configured; set N2YO_API_KEY or api_key in the config file");
    }

    let client = N2yoClient::new(config.client_config())?;
    tracing::debug!("Using N2YO API at {}", client.base_url());

    n2yo_cli::run(&client, cli).await
}
