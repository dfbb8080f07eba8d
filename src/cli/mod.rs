//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Tally using clap.

pub mod commands;

use crate::config::Environment;
use clap::{Parser, Subcommand};

/// Tally - shared expense tracking client
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
#[command(author = "Tally Contributors")]
pub struct Cli {
    /// Extra env file to load on top of `./.env`
    #[arg(short, long, env = "TALLY_ENV_FILE")]
    pub env_file: Option<String>,

    /// Execution mode
    #[arg(
        short = 'E',
        long,
        value_enum,
        default_value_t = Environment::Development,
        env = "TALLY_ENV"
    )]
    pub environment: Environment,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TALLY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Also write JSON logs to this directory
    #[arg(long, env = "TALLY_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the environment against the configuration schema
    ValidateConfig(commands::validate::ValidateArgs),

    /// Run the bootstrap gate and start the interactive client
    Start(commands::start::StartArgs),

    /// Write a starter .env file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::validate::OutputFormat;

    #[test]
    fn test_cli_parse_start() {
        let cli = Cli::parse_from(["tally", "start"]);
        assert!(cli.env_file.is_none());
        assert!(matches!(cli.command, Commands::Start(_)));
    }

    #[test]
    fn test_cli_parse_with_env_file() {
        let cli = Cli::parse_from(["tally", "--env-file", ".env.staging", "start"]);
        assert_eq!(cli.env_file.as_deref(), Some(".env.staging"));
    }

    #[test]
    fn test_cli_parse_with_environment() {
        let cli = Cli::parse_from(["tally", "--environment", "production", "start"]);
        assert_eq!(cli.environment, Environment::Production);
    }

    #[test]
    fn test_cli_rejects_unknown_environment() {
        let result = Cli::try_parse_from(["tally", "--environment", "qa", "start"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["tally", "--log-level", "debug", "start"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["tally", "validate-config", "--format", "json"]);
        match cli.command {
            Commands::ValidateConfig(args) => assert_eq!(args.format, OutputFormat::Json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["tally", "init", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.output, ".env");
                assert!(args.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
