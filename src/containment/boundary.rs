//! Error boundary: a supervisor around a subtree of components
//!
//! The boundary has two states. While [`HealthState::Healthy`] it renders its
//! child; a failure raised synchronously by the child's `render` or
//! `on_action` (returned `Err` or panic) is captured and the boundary moves
//! to [`HealthState::Failed`]. While failed the child is not rendered; a
//! recovery screen offers [`Action::Retry`] (back to healthy, render again)
//! and [`Action::Reload`] (restart the process).
//!
//! Failures raised from work the child schedules elsewhere (spawned tasks,
//! timers) never unwind through the boundary and are not captured.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tally::config::Environment;
//! use tally::containment::{ErrorBoundary, TracingReporter};
//! use tally::ui::{Action, Component, RenderError, Screen};
//!
//! struct Flaky;
//!
//! impl Component for Flaky {
//!     fn name(&self) -> &str { "Flaky" }
//!     fn render(&mut self) -> Result<Screen, RenderError> {
//!         Err(RenderError::new("no data"))
//!     }
//! }
//!
//! let mut boundary = ErrorBoundary::new(Flaky, Environment::Development, Arc::new(TracingReporter));
//! let screen = boundary.render_screen();
//! assert!(screen.offers(Action::Retry));
//! assert_eq!(boundary.captured_error().unwrap().message, "no data");
//! ```

use super::failure::RenderFailure;
use super::reporter::ErrorReporter;
use crate::config::Environment;
use crate::ui::{Action, ActionOutcome, Component, RenderError, Screen};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Health of the subtree owned by a boundary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HealthState {
    /// Children render normally
    #[default]
    Healthy,
    /// A failure was captured; children are not rendered
    Failed(RenderFailure),
}

/// The retry action, bound to the boundary that handed it out
///
/// Custom fallback renderers place it on their screen; the session routes it
/// back to the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryAction(());

impl From<RetryAction> for Action {
    fn from(_: RetryAction) -> Self {
        Action::Retry
    }
}

/// Caller-supplied renderer replacing the default recovery screen
pub type FallbackRenderer = Box<dyn Fn(&RenderFailure, RetryAction) -> Screen>;

/// Containment boundary around a child component
pub struct ErrorBoundary<C> {
    child: C,
    state: HealthState,
    environment: Environment,
    reporter: Arc<dyn ErrorReporter>,
    fallback: Option<FallbackRenderer>,
    failures: u32,
}

impl<C: Component> ErrorBoundary<C> {
    /// Wraps `child` in a healthy boundary
    ///
    /// `reporter` receives captured failures in production; elsewhere the
    /// details are shown inline on the recovery screen.
    pub fn new(child: C, environment: Environment, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            child,
            state: HealthState::Healthy,
            environment,
            reporter,
            fallback: None,
            failures: 0,
        }
    }

    /// Replaces the default recovery screen
    pub fn with_fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&RenderFailure, RetryAction) -> Screen + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Current health state
    pub fn state(&self) -> &HealthState {
        &self.state
    }

    /// True while no failure is captured
    pub fn is_healthy(&self) -> bool {
        matches!(self.state, HealthState::Healthy)
    }

    /// The captured failure, if any
    pub fn captured_error(&self) -> Option<&RenderFailure> {
        match &self.state {
            HealthState::Healthy => None,
            HealthState::Failed(failure) => Some(failure),
        }
    }

    /// Number of failures captured over the boundary's lifetime
    pub fn failure_count(&self) -> u32 {
        self.failures
    }

    /// The wrapped child
    pub fn child(&self) -> &C {
        &self.child
    }

    /// Renders the child, or the recovery screen if the boundary has failed
    ///
    /// Never fails: a child failure is captured and the recovery screen is
    /// returned in its place.
    pub fn render_screen(&mut self) -> Screen {
        if let HealthState::Failed(failure) = &self.state {
            return self.recovery_screen(failure);
        }

        let child = &mut self.child;
        let child_name = child.name().to_string();
        let failure = match panic::catch_unwind(AssertUnwindSafe(|| child.render())) {
            Ok(Ok(screen)) => return screen,
            Ok(Err(err)) => RenderFailure::from_error(err, &child_name),
            Err(payload) => RenderFailure::from_panic(payload, &child_name),
        };

        let screen = self.recovery_screen(&failure);
        self.capture(failure);
        screen
    }

    /// Applies a user action
    ///
    /// While failed, `Retry` clears the failure and `Reload` asks for a
    /// process restart. While healthy, actions go to the child.
    pub fn handle(&mut self, action: Action) -> ActionOutcome {
        if !self.is_healthy() {
            return match action {
                Action::Retry => {
                    self.state = HealthState::Healthy;
                    info!(failures = self.failures, "Retrying after render failure");
                    ActionOutcome::Handled
                }
                Action::Reload => {
                    info!("Reload requested from recovery screen");
                    ActionOutcome::RestartProcess
                }
                _ => ActionOutcome::Ignored,
            };
        }

        let child = &mut self.child;
        let child_name = child.name().to_string();
        match panic::catch_unwind(AssertUnwindSafe(|| child.on_action(action))) {
            Ok(outcome) => outcome,
            Err(payload) => {
                self.capture(RenderFailure::from_panic(payload, &child_name));
                ActionOutcome::Handled
            }
        }
    }

    fn capture(&mut self, failure: RenderFailure) {
        self.failures += 1;

        if self.environment.is_production() {
            warn!(
                component_stack = %failure.stack_trail(),
                failures = self.failures,
                "Render failure contained, forwarding to error reporter"
            );
            self.reporter.report(&failure);
        } else {
            debug!(
                message = %failure.message,
                component_stack = %failure.stack_trail(),
                failures = self.failures,
                "Render failure contained"
            );
        }

        self.state = HealthState::Failed(failure);
    }

    fn recovery_screen(&self, failure: &RenderFailure) -> Screen {
        if let Some(fallback) = &self.fallback {
            return fallback(failure, RetryAction(()));
        }

        let mut screen = Screen::new("Something went wrong")
            .line("The application hit an unexpected error while rendering.")
            .line("Retry to render it again, or reload to restart the application.");

        if !self.environment.is_production() {
            screen = screen
                .blank()
                .line("Details:")
                .line(format!("  {failure}"))
                .line(format!("  in: {}", failure.stack_trail()));
        }

        screen.action(Action::Retry).action(Action::Reload)
    }
}

impl<C: Component> Component for ErrorBoundary<C> {
    fn name(&self) -> &str {
        "ErrorBoundary"
    }

    fn render(&mut self) -> Result<Screen, RenderError> {
        Ok(self.render_screen())
    }

    fn on_action(&mut self, action: Action) -> ActionOutcome {
        self.handle(action)
    }
}
