// Tally - shared expense tracking client
// Copyright (c) 2025 Tally Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use tally::cli::{Cli, Commands};
use tally::config::{ConfigResolver, EnvSnapshot, LoggingConfig};
use tally::logging::init_logging;
use tally::runtime::{ProcessRestarter, SessionExit};

/// What the dispatched command asks the process to do next
enum Next {
    Exit(i32),
    Restart,
}

#[tokio::main]
async fn main() {
    // Captured before any env file is loaded so a restart re-reads them
    let restarter = ProcessRestarter::capture();

    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    if let Some(path) = cli.env_file.as_deref() {
        if let Err(e) = dotenvy::from_filename_override(path) {
            eprintln!("Failed to load env file {path}: {e}");
            process::exit(2);
        }
    }

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = match cli.log_dir.as_deref() {
        Some(dir) => LoggingConfig {
            local_enabled: true,
            local_path: dir.to_string(),
            ..LoggingConfig::default()
        },
        None => LoggingConfig::default(),
    };
    let guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %cli.environment,
        "Tally - shared expense tracking client"
    );

    let next = match execute_command(&cli).await {
        Ok(next) => next,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            Next::Exit(5) // Fatal error exit code
        }
    };

    let exit_code = match next {
        Next::Exit(code) => code,
        Next::Restart => {
            // Flush file logs before the process image is replaced
            drop(guard);
            let result = restarter.and_then(|r| r.restart().map(|never| match never {}));
            match result {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("Error: {e}");
                    5
                }
            }
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<Next> {
    let resolver = ConfigResolver::new(EnvSnapshot::capture());

    match &cli.command {
        Commands::ValidateConfig(args) => {
            Ok(Next::Exit(args.execute(&resolver, cli.environment).await?))
        }
        Commands::Start(args) => match args.execute(resolver, cli.environment).await? {
            SessionExit::Quit => Ok(Next::Exit(0)),
            SessionExit::Blocked => Ok(Next::Exit(2)),
            SessionExit::Reload => Ok(Next::Restart),
        },
        Commands::Init(args) => Ok(Next::Exit(args.execute().await?)),
    }
}
