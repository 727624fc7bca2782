use std::io;

use anyhow::Context;
use dotenv::dotenv;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use health_profile_cli::Shell;
use health_profile_domain::services::create_default_profile_service;
use health_profile_domain::StorageConfig;

/// The main entry point for the HealthProfile console
///
/// This function:
/// 1. Initializes environment variables from .env file
/// 2. Sets up tracing for logging on stderr, keeping stdout for the menu
/// 3. Resolves where the profiles file lives
/// 4. Runs the interactive menu on stdin/stdout
fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    let dotenv_loaded = dotenv().is_ok();

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(io::stderr))
        .with(env_filter)
        .init();

    if !dotenv_loaded {
        debug!(".env file not found or couldn't be read. Using environment variables.");
    }

    let config = StorageConfig::from_env().context("invalid storage configuration")?;
    info!("Starting HealthProfile console with profiles file {}", config.profiles_path.display());

    let service = create_default_profile_service(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(service, stdin.lock(), stdout.lock());
    shell.run().context("console session failed")?;

    info!("Console session finished");
    Ok(())
}
