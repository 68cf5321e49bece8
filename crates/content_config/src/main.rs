use clap::Parser;

use content_config::cli::Cli;
use content_config::utils::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on environment
    logging::init_logging()?;

    // Load the configuration and run the command
    if let Err(e) = cli.run().await {
        tracing::error!("Failed to process content configuration: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
