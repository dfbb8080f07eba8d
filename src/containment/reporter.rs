//! Error reporting sinks
//!
//! An [`ErrorBoundary`](super::ErrorBoundary) running in production forwards
//! every captured failure to an [`ErrorReporter`]. Reporting is
//! fire-and-forget: the boundary never waits for, or looks at, the outcome.
//!
//! - [`TracingReporter`] emits a structured `error` event
//! - [`HttpReporter`] POSTs a JSON event to an ingestion endpoint

use super::failure::RenderFailure;
use crate::config::Environment;
use crate::domain::{AppError, Result};
use chrono::Utc;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Sink for captured render failures
pub trait ErrorReporter: Send + Sync {
    /// Hands `failure` to the sink; must not block the caller
    fn report(&self, failure: &RenderFailure);
}

/// Reports failures as structured log events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, failure: &RenderFailure) {
        error!(
            message = %failure.message,
            origin = ?failure.origin,
            component_stack = %failure.stack_trail(),
            "Render failure captured"
        );
    }
}

/// Sends failures to an HTTP ingestion endpoint
///
/// Delivery runs on the tokio runtime that was current when the reporter was
/// built, so `report` can be called from synchronous render code.
///
/// # Example
///
/// ```no_run
/// use tally::config::Environment;
/// use tally::containment::HttpReporter;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let reporter = HttpReporter::new("https://errors.example.com/ingest", Environment::Production)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpReporter {
    endpoint: String,
    environment: Environment,
    http_client: reqwest::Client,
    runtime: tokio::runtime::Handle,
}

impl HttpReporter {
    /// Creates a reporter for `endpoint`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an http(s) URL, if the HTTP
    /// client cannot be built, or if no tokio runtime is running
    pub fn new(endpoint: &str, environment: Environment) -> Result<Self> {
        let url = url::Url::parse(endpoint).map_err(|e| {
            AppError::Configuration(format!("Invalid error reporting URL '{endpoint}': {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Configuration(format!(
                "Error reporting URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            AppError::Reporting(format!("HTTP reporter requires a tokio runtime: {e}"))
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Reporting(format!("Failed to create HTTP client: {e}")))?;

        debug!(endpoint = %url, "HTTP error reporter initialized");

        Ok(Self {
            endpoint: url.to_string(),
            environment,
            http_client,
            runtime,
        })
    }

    /// Builds the JSON event for a failure
    pub fn event(&self, failure: &RenderFailure) -> serde_json::Value {
        json!({
            "event_id": Uuid::new_v4(),
            "timestamp": Utc::now().to_rfc3339(),
            "release": env!("CARGO_PKG_VERSION"),
            "environment": self.environment,
            "message": failure.message,
            "origin": failure.origin,
            "component_stack": failure.component_stack,
        })
    }

    /// Delivers a failure and waits for the endpoint's answer
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the endpoint answers with a
    /// non-success status
    pub async fn send(&self, failure: &RenderFailure) -> Result<()> {
        post_event(&self.http_client, &self.endpoint, self.event(failure)).await
    }
}

impl ErrorReporter for HttpReporter {
    fn report(&self, failure: &RenderFailure) {
        let client = self.http_client.clone();
        let endpoint = self.endpoint.clone();
        let event = self.event(failure);

        self.runtime.spawn(async move {
            if let Err(e) = post_event(&client, &endpoint, event).await {
                warn!(error = %e, "Dropped render failure report");
            }
        });
    }
}

async fn post_event(
    client: &reqwest::Client,
    endpoint: &str,
    event: serde_json::Value,
) -> Result<()> {
    let response = client
        .post(endpoint)
        .json(&event)
        .send()
        .await
        .map_err(|e| AppError::Reporting(format!("Failed to send failure report: {e}")))?;

    let status = response.status();
    if status.is_success() {
        debug!(status = %status, "Render failure report delivered");
        Ok(())
    } else {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(AppError::Reporting(format!(
            "Error reporting endpoint returned status {status}: {body}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containment::failure::FailureOrigin;
    use mockito::Matcher;

    fn failure() -> RenderFailure {
        RenderFailure {
            message: "ledger missing".to_string(),
            origin: FailureOrigin::Panic,
            component_stack: vec!["Balances".to_string(), "App".to_string()],
        }
    }

    #[test]
    fn test_http_reporter_requires_runtime() {
        let result = HttpReporter::new("https://errors.example.com", Environment::Production);
        assert!(matches!(result, Err(AppError::Reporting(_))));
    }

    #[tokio::test]
    async fn test_http_reporter_rejects_bad_urls() {
        assert!(HttpReporter::new("not a url", Environment::Production).is_err());
        assert!(HttpReporter::new("ftp://errors.example.com", Environment::Production).is_err());
    }

    #[tokio::test]
    async fn test_event_shape() {
        let reporter =
            HttpReporter::new("https://errors.example.com/ingest", Environment::Production)
                .unwrap();
        let event = reporter.event(&failure());
        assert_eq!(event["environment"], "production");
        assert_eq!(event["origin"], "panic");
        assert_eq!(event["message"], "ledger missing");
        assert!(event["event_id"].is_string());
    }

    #[tokio::test]
    async fn test_send_posts_json_event() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/ingest")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "message": "ledger missing",
                "origin": "panic",
                "component_stack": ["Balances", "App"],
            })))
            .with_status(202)
            .create_async()
            .await;

        let reporter =
            HttpReporter::new(&format!("{}/ingest", server.url()), Environment::Production)
                .unwrap();
        reporter.send(&failure()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_surfaces_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/ingest")
            .with_status(500)
            .with_body("ingest down")
            .create_async()
            .await;

        let reporter =
            HttpReporter::new(&format!("{}/ingest", server.url()), Environment::Production)
                .unwrap();
        let err = reporter.send(&failure()).await.unwrap_err();
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("ingest down"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_report_delivers_in_background() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/ingest")
            .with_status(202)
            .create_async()
            .await;

        let reporter =
            HttpReporter::new(&format!("{}/ingest", server.url()), Environment::Production)
                .unwrap();
        reporter.report(&failure());

        for _ in 0..100 {
            if mock.matched_async().await {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        mock.assert_async().await;
    }
}
