//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr
//! - Configurable log levels, overridable with `RUST_LOG`
//! - JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use tally::logging::init_logging;
//! use tally::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log every entry of a validation report
///
/// # Example
///
/// ```no_run
/// use tally::log_validation_report;
/// use tally::config::{ConfigResolver, ConfigSchema, ConfigValidator, EnvSnapshot, Environment};
///
/// let resolver = ConfigResolver::new(EnvSnapshot::capture());
/// let schema = ConfigSchema::standard();
/// let report = ConfigValidator::new(&resolver, &schema, Environment::Production).validate();
/// log_validation_report!(&report);
/// ```
#[macro_export]
macro_rules! log_validation_report {
    ($report:expr) => {{
        let report = $report;
        for entry in &report.missing {
            tracing::warn!(
                key = %entry.key,
                reason = entry.reason.as_deref().unwrap_or("not set"),
                "Required configuration missing"
            );
        }
        for warning in &report.warnings {
            tracing::warn!(warning = %warning, "Configuration warning");
        }
        tracing::info!(
            is_valid = report.is_valid,
            missing = report.missing.len(),
            warnings = report.warnings.len(),
            "Configuration checked"
        );
    }};
}
