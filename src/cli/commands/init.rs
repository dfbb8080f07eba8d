//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! `.env` file from the configuration schema.

use crate::config::{keys, ConfigKey, ConfigSchema};
use clap::Args;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the env file
    #[arg(short, long, default_value = ".env")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing env file");

        println!("📝 Initializing Tally configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Env file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let content = generate_env_template(&ConfigSchema::standard());

        match fs::write(&self.output, content) {
            Ok(_) => {
                println!("✅ Env file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Replace every your_... value in {}", self.output);
                println!("  2. Uncomment the optional integrations you use");
                println!("  3. Validate configuration: tally validate-config");
                println!("  4. Start the client: tally start");
                println!();
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, output = %self.output, "Failed to write env file");
                println!("❌ Failed to write env file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}

/// Example value written for a key
fn example_value(key: &ConfigKey) -> String {
    match key.as_str() {
        k if k == keys::APP_URL.as_str() => "http://localhost:3000".to_string(),
        k if k == keys::DEBUG_MODE.as_str() => "false".to_string(),
        k if k == keys::ERROR_REPORTING_URL.as_str() => {
            "https://errors.example.com/ingest".to_string()
        }
        other => format!("your_{}", other.to_lowercase()),
    }
}

/// Renders a `.env` template: required keys with placeholder values,
/// optional keys commented out
fn generate_env_template(schema: &ConfigSchema) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Tally environment");
    let _ = writeln!(out, "# Generated by `tally init`; values are placeholders.");
    let _ = writeln!(out);
    let _ = writeln!(out, "# Required");
    for key in schema.required() {
        let _ = writeln!(out, "{key}={}", example_value(key));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "# Optional");
    for key in schema.optional() {
        if let Some(advisory) = schema.advisory_for(key) {
            let _ = writeln!(out, "# {advisory}");
        }
        let _ = writeln!(out, "# {key}={}", example_value(key));
    }
    out
}
