//! Interactive terminal session
//!
//! The session renders the mounted tree, prints the screen, reads one command
//! and dispatches it, all on the caller's thread. It ends on `quit`, end of
//! input, or when the tree asks for a process restart.

use crate::bootstrap::Mount;
use crate::config::Environment;
use crate::containment::{ErrorBoundary, ErrorReporter};
use crate::domain::{AppError, Result};
use crate::ui::{Action, ActionOutcome, Component};
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// The gate blocked; only the configuration screen was shown
    Blocked,
    /// The user quit or input ended
    Quit,
    /// A restart of the whole process was requested
    Reload,
}

/// Drives a root component from line-based input
pub struct Session<C> {
    root: C,
}

impl<C: Component> Session<C> {
    /// Creates a session over `root`
    pub fn new(root: C) -> Self {
        Self { root }
    }

    /// The root component
    pub fn root(&self) -> &C {
        &self.root
    }

    /// Runs until quit, end of input, or a restart request
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, or if the
    /// root itself fails to render (roots are normally error boundaries, which
    /// never do)
    pub fn run(&mut self, mut input: impl BufRead, output: &mut impl Write) -> Result<SessionExit> {
        loop {
            let screen = self
                .root
                .render()
                .map_err(|e| AppError::Render(e.to_string()))?;
            writeln!(output)?;
            screen.write_to(output)?;
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("Input closed, ending session");
                return Ok(SessionExit::Quit);
            }

            let Some(action) = Action::parse(&line) else {
                writeln!(output, "Unknown command '{}'", line.trim())?;
                continue;
            };

            if action == Action::Quit {
                return Ok(SessionExit::Quit);
            }

            match self.root.on_action(action) {
                ActionOutcome::RestartProcess => return Ok(SessionExit::Reload),
                ActionOutcome::Handled => {}
                ActionOutcome::Ignored => {
                    writeln!(output, "Nothing to {action} here")?;
                }
            }
        }
    }
}

/// Runs whatever the gate mounted
///
/// A blocked mount prints the static configuration screen and returns
/// immediately without reading input. A passed mount is wrapped in an
/// [`ErrorBoundary`] and driven interactively.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails
pub fn run_mount<C: Component>(
    mount: Mount<C>,
    environment: Environment,
    reporter: Arc<dyn ErrorReporter>,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<SessionExit> {
    match mount {
        Mount::Blocked(screen) => {
            screen.write_to(output)?;
            Ok(SessionExit::Blocked)
        }
        Mount::Passed(provider) => {
            let boundary = ErrorBoundary::new(provider, environment, reporter);
            Session::new(boundary).run(input, output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containment::TracingReporter;
    use crate::ui::{RenderError, Screen};
    use std::io::Cursor;

    struct Counter {
        count: u32,
    }

    impl Component for Counter {
        fn name(&self) -> &str {
            "Counter"
        }

        fn render(&mut self) -> std::result::Result<Screen, RenderError> {
            if self.count >= 2 {
                return Err(RenderError::new("counter overflow"));
            }
            Ok(Screen::new("Counter").line(format!("count = {}", self.count)))
        }

        fn on_action(&mut self, action: Action) -> ActionOutcome {
            match action {
                Action::Refresh => {
                    self.count += 1;
                    ActionOutcome::Handled
                }
                _ => ActionOutcome::Ignored,
            }
        }
    }

    fn bounded(count: u32) -> Session<ErrorBoundary<Counter>> {
        Session::new(ErrorBoundary::new(
            Counter { count },
            Environment::Development,
            Arc::new(TracingReporter),
        ))
    }

    #[test]
    fn test_quit_ends_session() {
        let mut session = bounded(0);
        let mut out = Vec::<u8>::new();
        let exit = session.run(Cursor::new("quit\n"), &mut out).unwrap();
        assert_eq!(exit, SessionExit::Quit);
        assert!(String::from_utf8(out).unwrap().contains("count = 0"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut session = bounded(0);
        let exit = session.run(Cursor::new(""), &mut Vec::<u8>::new()).unwrap();
        assert_eq!(exit, SessionExit::Quit);
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let mut session = bounded(0);
        let mut out = Vec::<u8>::new();
        session.run(Cursor::new("dance\nq\n"), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Unknown command 'dance'"));
    }

    #[test]
    fn test_failure_then_reload_requests_restart() {
        let mut session = bounded(1);
        let mut out = Vec::<u8>::new();
        let exit = session
            .run(Cursor::new("refresh\nreload\n"), &mut out)
            .unwrap();

        assert_eq!(exit, SessionExit::Reload);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Something went wrong"));
        assert!(text.contains("counter overflow"));
    }

    #[test]
    fn test_retry_with_persistent_defect_fails_again() {
        let mut session = bounded(2);
        let mut out = Vec::<u8>::new();
        session
            .run(Cursor::new("retry\nretry\nquit\n"), &mut out)
            .unwrap();

        assert_eq!(session.root().failure_count(), 3);
        assert!(!session.root().is_healthy());
    }
}
