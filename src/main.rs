//! Assistant Bot - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout.

use anyhow::Result;
use assistant_bot::{run_bot, AddressBook, AssistantBot, Config, SystemClock};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep the stdout transcript clean)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut bot = AssistantBot::new(Box::new(AddressBook::new()), Box::new(SystemClock));

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    if let Err(e) = run_bot(&mut bot, stdin.lock(), &mut stdout, &config.prompt) {
        error!("Session ended with an I/O error: {}", e);
        return Err(e);
    }

    info!("Assistant bot shutdown complete");
    Ok(())
}
