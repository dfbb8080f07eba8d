//! Rendered screens and the actions a user can take on them

use std::fmt;
use std::io::{self, Write};

/// User action offered by a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Re-render the current tree
    Refresh,
    /// Clear a captured render failure and render again
    Retry,
    /// Restart the whole process
    Reload,
    /// Leave the session
    Quit,
}

impl Action {
    /// The word the user types to trigger the action
    pub fn command(self) -> &'static str {
        match self {
            Action::Refresh => "refresh",
            Action::Retry => "retry",
            Action::Reload => "reload",
            Action::Quit => "quit",
        }
    }

    /// Short description shown next to the command
    pub fn label(self) -> &'static str {
        match self {
            Action::Refresh => "render the screen again",
            Action::Retry => "try rendering again",
            Action::Reload => "restart the application",
            Action::Quit => "exit",
        }
    }

    /// Parses user input; accepts the full command or its first letter,
    /// except for `reload`, which must be typed in full.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "refresh" | "f" => Some(Action::Refresh),
            "retry" | "r" => Some(Action::Retry),
            "reload" => Some(Action::Reload),
            "quit" | "q" | "exit" => Some(Action::Quit),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Output of a successful render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    /// Heading
    pub title: String,
    /// Body, one entry per line
    pub lines: Vec<String>,
    /// Actions offered to the user, in display order
    pub actions: Vec<Action>,
}

impl Screen {
    /// Creates an empty screen with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Appends a body line
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Appends a blank body line
    pub fn blank(self) -> Self {
        self.line("")
    }

    /// Offers an action
    pub fn action(mut self, action: Action) -> Self {
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
        self
    }

    /// True if the screen offers `action`
    pub fn offers(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Writes the screen as plain text
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        if !self.actions.is_empty() {
            writeln!(f)?;
            for action in &self.actions {
                writeln!(f, "  [{}] {}", action.command(), action.label())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parse() {
        assert_eq!(Action::parse("retry"), Some(Action::Retry));
        assert_eq!(Action::parse(" R \n"), Some(Action::Retry));
        assert_eq!(Action::parse("reload"), Some(Action::Reload));
        assert_eq!(Action::parse("q"), Some(Action::Quit));
        assert_eq!(Action::parse("l"), None);
        assert_eq!(Action::parse(""), None);
    }

    #[test]
    fn test_screen_display() {
        let screen = Screen::new("Home")
            .line("hello")
            .action(Action::Quit)
            .action(Action::Quit);

        assert_eq!(screen.actions, vec![Action::Quit]);
        let text = screen.to_string();
        assert!(text.starts_with("== Home =="));
        assert!(text.contains("hello"));
        assert!(text.contains("[quit] exit"));
    }

    #[test]
    fn test_screen_write_to() {
        let mut buf = Vec::new();
        Screen::new("Title").write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "== Title ==\n");
    }
}
