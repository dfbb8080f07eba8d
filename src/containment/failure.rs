//! Captured render failures

use crate::ui::RenderError;
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// How a render failure surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureOrigin {
    /// The component returned `Err`
    Error,
    /// The component panicked
    Panic,
}

/// A render failure intercepted by an error boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderFailure {
    /// What the failing component reported
    pub message: String,
    /// Whether it was returned or panicked
    pub origin: FailureOrigin,
    /// Components the failure passed through, innermost first
    pub component_stack: Vec<String>,
}

impl RenderFailure {
    /// Captures a returned render error, closing its stack with `boundary_child`
    pub fn from_error(err: RenderError, boundary_child: &str) -> Self {
        let mut component_stack = err.component_stack().to_vec();
        if component_stack.last().map(String::as_str) != Some(boundary_child) {
            component_stack.push(boundary_child.to_string());
        }
        Self {
            message: err.message().to_string(),
            origin: FailureOrigin::Error,
            component_stack,
        }
    }

    /// Captures a panic payload
    ///
    /// Payloads raised by `panic!` with a message are `&str` or `String`; any
    /// other payload type is recorded generically.
    pub fn from_panic(payload: Box<dyn Any + Send>, boundary_child: &str) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "component panicked with a non-string payload".to_string()
        };
        Self {
            message,
            origin: FailureOrigin::Panic,
            component_stack: vec![boundary_child.to_string()],
        }
    }

    /// Component stack joined for display, outermost first
    pub fn stack_trail(&self) -> String {
        self.component_stack
            .iter()
            .rev()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            FailureOrigin::Error => write!(f, "{}", self.message),
            FailureOrigin::Panic => write!(f, "panic: {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_appends_boundary_child() {
        let err = RenderError::new("bad").in_component("Balances");
        let failure = RenderFailure::from_error(err, "App");
        assert_eq!(failure.message, "bad");
        assert_eq!(failure.origin, FailureOrigin::Error);
        assert_eq!(failure.component_stack, vec!["Balances", "App"]);
        assert_eq!(failure.stack_trail(), "App > Balances");
    }

    #[test]
    fn test_from_error_does_not_duplicate_child() {
        let err = RenderError::new("bad").in_component("App");
        let failure = RenderFailure::from_error(err, "App");
        assert_eq!(failure.component_stack, vec!["App"]);
    }

    #[test]
    fn test_from_panic_payloads() {
        let static_payload: Box<dyn Any + Send> = Box::new("static message");
        let owned_payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        let other_payload: Box<dyn Any + Send> = Box::new(42_u8);

        assert_eq!(
            RenderFailure::from_panic(static_payload, "App").message,
            "static message"
        );
        assert_eq!(
            RenderFailure::from_panic(owned_payload, "App").message,
            "owned message"
        );
        let other = RenderFailure::from_panic(other_payload, "App");
        assert!(other.message.contains("non-string payload"));
        assert_eq!(other.to_string(), format!("panic: {}", other.message));
    }

    #[test]
    fn test_failure_serializes() {
        let failure = RenderFailure::from_error(RenderError::new("bad"), "App");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["origin"], "error");
        assert_eq!(json["component_stack"][0], "App");
    }
}
