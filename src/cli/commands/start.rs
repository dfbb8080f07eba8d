//! Start command implementation
//!
//! This module implements the `start` command: it validates the
//! environment, runs the bootstrap gate and drives the mounted client from
//! the terminal.

use crate::bootstrap::BootstrapGate;
use crate::config::{keys, ConfigResolver, ConfigSchema, ConfigValidator, Environment};
use crate::containment::{ErrorReporter, HttpReporter, TracingReporter};
use crate::log_validation_report;
use crate::runtime::{run_mount, AppShell, SessionExit};
use clap::Args;
use std::sync::Arc;

/// Arguments for the start command
#[derive(Args, Debug)]
pub struct StartArgs {}

impl StartArgs {
    /// Execute the start command
    ///
    /// The session itself reads stdin, so it runs on the blocking pool.
    /// The caller decides what a [`SessionExit::Reload`] means.
    pub async fn execute(
        &self,
        resolver: ConfigResolver,
        environment: Environment,
    ) -> anyhow::Result<SessionExit> {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            environment = %environment,
            "Starting Tally"
        );

        let schema = ConfigSchema::standard();
        let report = ConfigValidator::new(&resolver, &schema, environment).validate();
        log_validation_report!(&report);

        let gate = BootstrapGate::mount(&resolver, schema.critical_secret());
        let reporter = select_reporter(&resolver, environment);
        let shell = AppShell::from_resolver(&resolver);

        let exit = tokio::task::spawn_blocking(move || {
            let mount = gate.into_mount(shell);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_mount(mount, environment, reporter, stdin.lock(), &mut stdout)
        })
        .await??;

        tracing::info!(exit = ?exit, "Session ended");
        Ok(exit)
    }
}

/// Picks the sink for captured render failures
///
/// An HTTP reporter is used when `ERROR_REPORTING_URL` is set and valid;
/// otherwise failures go to the log. Must be called inside a tokio runtime.
pub fn select_reporter(resolver: &ConfigResolver, environment: Environment) -> Arc<dyn ErrorReporter> {
    let endpoint = resolver
        .resolve(keys::ERROR_REPORTING_URL)
        .filter(|v| !v.trim().is_empty());

    match endpoint {
        Some(endpoint) => match HttpReporter::new(&endpoint, environment) {
            Ok(reporter) => Arc::new(reporter),
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to log-based error reporting");
                Arc::new(TracingReporter)
            }
        },
        None => Arc::new(TracingReporter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvSnapshot;

    #[tokio::test]
    async fn test_blocked_start_returns_without_reading_input() {
        let resolver = ConfigResolver::new(EnvSnapshot::from_pairs([(
            "SUPABASE_URL",
            "https://abc.supabase.co",
        )]));

        let exit = StartArgs {}
            .execute(resolver, Environment::Development)
            .await
            .unwrap();
        assert_eq!(exit, SessionExit::Blocked);
    }

    #[tokio::test]
    async fn test_select_reporter_accepts_http_endpoint() {
        let resolver = ConfigResolver::new(EnvSnapshot::from_pairs([(
            "ERROR_REPORTING_URL",
            "https://errors.example.com/ingest",
        )]));
        // Construction succeeds inside a runtime; nothing is sent
        let _reporter = select_reporter(&resolver, Environment::Production);
    }

    #[tokio::test]
    async fn test_select_reporter_falls_back_on_invalid_url() {
        let resolver = ConfigResolver::new(EnvSnapshot::from_pairs([(
            "ERROR_REPORTING_URL",
            "not a url",
        )]));
        let _reporter = select_reporter(&resolver, Environment::Production);
    }
}
