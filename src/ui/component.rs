//! The component abstraction every mounted tree is built from

use super::screen::{Action, Screen};
use thiserror::Error;

/// Error returned by a component that cannot render
///
/// `component_stack` is filled in as the error travels outwards: the
/// innermost component comes first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RenderError {
    message: String,
    component_stack: Vec<String>,
}

impl RenderError {
    /// Creates a render error with no component context yet
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            component_stack: Vec::new(),
        }
    }

    /// Records that the error passed through component `name`
    ///
    /// # Example
    ///
    /// ```
    /// use tally::ui::RenderError;
    ///
    /// let err = RenderError::new("no ledger").in_component("Balances").in_component("App");
    /// assert_eq!(err.component_stack(), ["Balances", "App"]);
    /// ```
    pub fn in_component(mut self, name: impl Into<String>) -> Self {
        self.component_stack.push(name.into());
        self
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Components the error passed through, innermost first
    pub fn component_stack(&self) -> &[String] {
        &self.component_stack
    }
}

/// What a component did with a user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action changed something; render again
    Handled,
    /// The action does not apply here
    Ignored,
    /// The whole process has to be restarted
    RestartProcess,
}

/// A renderable node of the application tree
///
/// Rendering is synchronous. A component signals failure either by returning
/// `Err` or by panicking; an enclosing
/// [`ErrorBoundary`](crate::containment::ErrorBoundary) intercepts both, and
/// also intercepts panics raised from [`Component::on_action`].
pub trait Component {
    /// Name used in component stacks and logs
    fn name(&self) -> &str;

    /// Produces the component's screen
    fn render(&mut self) -> Result<Screen, RenderError>;

    /// Reacts to a user action; containers forward to their children
    fn on_action(&mut self, _action: Action) -> ActionOutcome {
        ActionOutcome::Ignored
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&mut self) -> Result<Screen, RenderError> {
        (**self).render()
    }

    fn on_action(&mut self, action: Action) -> ActionOutcome {
        (**self).on_action(action)
    }
}
