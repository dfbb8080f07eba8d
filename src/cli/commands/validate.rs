//! Validate config command implementation
//!
//! This module implements the `validate-config` command, which prints the
//! validation report for the current environment without starting the
//! client.

use crate::bootstrap::{BootstrapGate, GateDecision};
use crate::config::{ConfigResolver, ConfigSchema, ConfigValidator, Environment, ValidationReport};
use crate::log_validation_report;
use clap::{Args, ValueEnum};
use std::fmt::Write as _;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Redacted report as JSON
    Json,
}

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(
        &self,
        resolver: &ConfigResolver,
        environment: Environment,
    ) -> anyhow::Result<i32> {
        tracing::info!(environment = %environment, "Validating configuration");

        let schema = ConfigSchema::standard();
        let report = ConfigValidator::new(resolver, &schema, environment).validate();
        log_validation_report!(&report);

        let gate = BootstrapGate::decide(resolver, schema.critical_secret());

        match self.format {
            OutputFormat::Text => print!("{}", render_text(&report, environment, gate)),
            OutputFormat::Json => {
                let body = serde_json::json!({
                    "environment": environment,
                    "gate": gate,
                    "report": report.redacted(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
        }

        // Configuration error exit code
        Ok(if report.is_valid { 0 } else { 2 })
    }
}

/// Human-readable rendering of a report
fn render_text(report: &ValidationReport, environment: Environment, gate: GateDecision) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🔍 Validating configuration ({environment})");
    let _ = writeln!(out);

    if report.missing.is_empty() {
        let _ = writeln!(out, "✅ All required configuration is present");
    } else {
        let _ = writeln!(out, "❌ Missing required configuration:");
        for entry in &report.missing {
            let _ = writeln!(out, "   - {entry}");
        }
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "⚠️  Warnings:");
        for warning in &report.warnings {
            let _ = writeln!(out, "   - {warning}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Configuration Summary:");
    for (key, value) in &report.redacted().snapshot {
        let shown = value.as_deref().unwrap_or("(not set)");
        let _ = writeln!(out, "  {key}: {shown}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Bootstrap gate: {gate}");
    if report.is_valid {
        let _ = writeln!(out, "✅ Configuration is valid");
    } else {
        let _ = writeln!(out, "❌ Configuration is invalid");
    }
    out
}
