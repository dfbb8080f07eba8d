//! Application shell
//!
//! Stand-in for the protected application tree: it renders which backing
//! services are configured. Its render fails when the database URL cannot be
//! parsed, since every view of the real client depends on that connection.

use crate::config::{keys, ConfigKey, ConfigResolver};
use crate::ui::{Action, ActionOutcome, Component, RenderError, Screen};

/// Top-level component of the mounted application
#[derive(Debug, Clone)]
pub struct AppShell {
    database_url: Option<String>,
    app_url: Option<String>,
    email_enabled: bool,
    ai_enabled: bool,
    debug: bool,
    refreshes: u64,
}

impl AppShell {
    /// Builds the shell from resolved configuration
    pub fn from_resolver(resolver: &ConfigResolver) -> Self {
        let present = |key: ConfigKey| {
            resolver
                .resolve(key)
                .is_some_and(|v| !v.trim().is_empty())
        };

        Self {
            database_url: resolver.resolve(keys::SUPABASE_URL),
            app_url: resolver.resolve(keys::APP_URL),
            email_enabled: present(keys::RESEND_API_KEY),
            ai_enabled: present(keys::GEMINI_API_KEY),
            debug: resolver.resolve_bool(keys::DEBUG_MODE, false),
            refreshes: 0,
        }
    }

    fn database_host(&self) -> Result<String, RenderError> {
        let raw = self
            .database_url
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| RenderError::new("database URL is not configured"))?;

        let url = url::Url::parse(raw)
            .map_err(|e| RenderError::new(format!("database URL is not a valid URL: {e}")))?;

        url.host_str()
            .map(str::to_string)
            .ok_or_else(|| RenderError::new("database URL has no host"))
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}

impl Component for AppShell {
    fn name(&self) -> &str {
        "AppShell"
    }

    fn render(&mut self) -> Result<Screen, RenderError> {
        let host = self.database_host().map_err(|e| e.in_component("AppShell"))?;

        let mut screen = Screen::new("Tally")
            .line(format!("Database: {host}"))
            .line(format!("Email notifications: {}", enabled(self.email_enabled)))
            .line(format!("AI receipt scanning: {}", enabled(self.ai_enabled)));

        if let Some(app_url) = &self.app_url {
            screen = screen.line(format!("Serving at: {app_url}"));
        }
        if self.debug {
            screen = screen.line(format!("Debug: {} refreshes", self.refreshes));
        }

        Ok(screen.action(Action::Refresh).action(Action::Quit))
    }

    fn on_action(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::Refresh => {
                self.refreshes += 1;
                ActionOutcome::Handled
            }
            _ => ActionOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvSnapshot;

    fn shell(pairs: &[(&str, &str)]) -> AppShell {
        AppShell::from_resolver(&ConfigResolver::new(EnvSnapshot::from_pairs(
            pairs.iter().copied(),
        )))
    }

    #[test]
    fn test_renders_service_status() {
        let mut shell = shell(&[
            ("SUPABASE_URL", "https://abcd.supabase.co"),
            ("RESEND_API_KEY", "re_123"),
        ]);
        let screen = shell.render().unwrap();
        assert!(screen.lines.contains(&"Database: abcd.supabase.co".to_string()));
        assert!(screen
            .lines
            .contains(&"Email notifications: enabled".to_string()));
        assert!(screen
            .lines
            .contains(&"AI receipt scanning: disabled".to_string()));
        assert!(screen.offers(Action::Refresh));
    }

    #[test]
    fn test_invalid_database_url_fails_render() {
        let mut shell = shell(&[("SUPABASE_URL", "your_supabase_project_url")]);
        let err = shell.render().unwrap_err();
        assert!(err.message().contains("not a valid URL"));
        assert_eq!(err.component_stack(), ["AppShell"]);
    }

    #[test]
    fn test_missing_database_url_fails_render() {
        let mut shell = shell(&[]);
        assert!(shell.render().is_err());
    }

    #[test]
    fn test_refresh_is_handled() {
        let mut shell = shell(&[
            ("SUPABASE_URL", "https://abcd.supabase.co"),
            ("DEBUG_MODE", "true"),
        ]);
        assert_eq!(shell.on_action(Action::Refresh), ActionOutcome::Handled);
        assert_eq!(shell.on_action(Action::Retry), ActionOutcome::Ignored);
        let screen = shell.render().unwrap();
        assert!(screen.lines.contains(&"Debug: 1 refreshes".to_string()));
    }
}
