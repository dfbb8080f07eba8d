//! Render failure containment
//!
//! - [`ErrorBoundary`] - Healthy/Failed supervisor around a component subtree
//! - [`RenderFailure`] - what a boundary captures
//! - [`ErrorReporter`] - where production failures are forwarded
//!   ([`TracingReporter`], [`HttpReporter`])

pub mod boundary;
pub mod failure;
pub mod reporter;

pub use boundary::{ErrorBoundary, FallbackRenderer, HealthState, RetryAction};
pub use failure::{FailureOrigin, RenderFailure};
pub use reporter::{ErrorReporter, HttpReporter, TracingReporter};
