//! Bootstrap gate
//!
//! Decides, once per process, whether the application tree may be mounted.
//! The only input is the identity provider's publishable key: without it no
//! session can ever be established, so the gate shows a static configuration
//! screen instead of mounting anything. The gate does its own presence check
//! rather than consulting the full validation report, and it never re-checks:
//! supplying the key requires a restart.

use super::identity::{IdentityProvider, IdentityProviderConfig};
use crate::config::{secret_string, ConfigKey, ConfigResolver, SecretString};
use crate::ui::{Component, Screen};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// Outcome of the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateDecision {
    /// The critical secret is missing; nothing is mounted
    Blocked,
    /// The application may be mounted
    Passed,
}

impl fmt::Display for GateDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateDecision::Blocked => f.write_str("blocked"),
            GateDecision::Passed => f.write_str("passed"),
        }
    }
}

/// What the gate mounted
pub enum Mount<C> {
    /// Static configuration screen; the application was not mounted
    Blocked(Screen),
    /// Identity provider wrapping the application
    Passed(IdentityProvider<C>),
}

/// The gate, holding the decision taken at mount time
#[derive(Debug)]
pub struct BootstrapGate {
    critical_key: ConfigKey,
    decision: GateDecision,
    publishable_key: Option<SecretString>,
}

impl BootstrapGate {
    /// Decision for `critical_key`: blocked iff absent or blank after trimming
    ///
    /// # Example
    ///
    /// ```
    /// use tally::bootstrap::{BootstrapGate, GateDecision};
    /// use tally::config::{keys, ConfigResolver, EnvSnapshot};
    ///
    /// let resolver = ConfigResolver::new(EnvSnapshot::from_pairs([("CLERK_PUBLISHABLE_KEY", "  ")]));
    /// assert_eq!(BootstrapGate::decide(&resolver, &keys::CLERK_PUBLISHABLE_KEY), GateDecision::Blocked);
    /// ```
    pub fn decide(resolver: &ConfigResolver, critical_key: &ConfigKey) -> GateDecision {
        match resolver.resolve(critical_key) {
            Some(value) if !value.trim().is_empty() => GateDecision::Passed,
            _ => GateDecision::Blocked,
        }
    }

    /// Takes the mount-time decision
    pub fn mount(resolver: &ConfigResolver, critical_key: &ConfigKey) -> Self {
        let decision = Self::decide(resolver, critical_key);
        let publishable_key = match decision {
            GateDecision::Passed => resolver.resolve(critical_key).map(secret_string),
            GateDecision::Blocked => None,
        };

        match decision {
            GateDecision::Passed => info!(key = %critical_key, "Bootstrap gate passed"),
            GateDecision::Blocked => {
                warn!(key = %critical_key, "Bootstrap gate blocked: critical secret missing")
            }
        }

        Self {
            critical_key: critical_key.clone(),
            decision,
            publishable_key,
        }
    }

    /// The decision taken at mount time
    pub fn decision(&self) -> GateDecision {
        self.decision
    }

    /// The key the gate checks
    pub fn critical_key(&self) -> &ConfigKey {
        &self.critical_key
    }

    /// Static screen shown when blocked
    pub fn blocked_screen(&self) -> Screen {
        let key = &self.critical_key;
        Screen::new("Configuration required")
            .line(format!("Missing {key}."))
            .line("Tally cannot start without the identity provider's publishable key.")
            .blank()
            .line(format!(
                "Set {key} in the environment or in your .env file, then restart the application."
            ))
    }

    /// Hands `app` over to the identity provider, or returns the blocked screen
    pub fn into_mount<C: Component>(self, app: C) -> Mount<C> {
        let screen = self.blocked_screen();
        match self.publishable_key {
            Some(key) => Mount::Passed(IdentityProvider::new(IdentityProviderConfig::new(key), app)),
            None => Mount::Blocked(screen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{keys, EnvSnapshot};
    use crate::ui::RenderError;
    use secrecy::ExposeSecret;
    use test_case::test_case;

    struct App;

    impl Component for App {
        fn name(&self) -> &str {
            "App"
        }

        fn render(&mut self) -> Result<Screen, RenderError> {
            Ok(Screen::new("App"))
        }
    }

    fn resolver(value: Option<&str>) -> ConfigResolver {
        let pairs: Vec<(&str, &str)> = value
            .map(|v| vec![("CLERK_PUBLISHABLE_KEY", v)])
            .unwrap_or_default();
        ConfigResolver::new(EnvSnapshot::from_pairs(pairs))
    }

    #[test_case(None, GateDecision::Blocked ; "absent")]
    #[test_case(Some(""), GateDecision::Blocked ; "empty")]
    #[test_case(Some(" \t "), GateDecision::Blocked ; "whitespace only")]
    #[test_case(Some("pk_test_abc"), GateDecision::Passed ; "present")]
    #[test_case(Some("  pk_test_abc  "), GateDecision::Passed ; "padded")]
    fn test_decide(value: Option<&str>, expected: GateDecision) {
        assert_eq!(
            BootstrapGate::decide(&resolver(value), &keys::CLERK_PUBLISHABLE_KEY),
            expected
        );
    }

    #[test]
    fn test_blocked_mount_never_mounts_app() {
        let gate = BootstrapGate::mount(&resolver(None), &keys::CLERK_PUBLISHABLE_KEY);
        assert_eq!(gate.decision(), GateDecision::Blocked);

        match gate.into_mount(App) {
            Mount::Blocked(screen) => {
                assert!(screen.to_string().contains("CLERK_PUBLISHABLE_KEY"));
                assert!(screen.actions.is_empty());
            }
            Mount::Passed(_) => panic!("blocked gate mounted the app"),
        }
    }

    #[test]
    fn test_passed_mount_configures_identity_provider() {
        let gate = BootstrapGate::mount(&resolver(Some("pk_test_abc")), &keys::CLERK_PUBLISHABLE_KEY);
        assert_eq!(gate.decision(), GateDecision::Passed);

        match gate.into_mount(App) {
            Mount::Passed(provider) => {
                let config = provider.config();
                assert!(config.publishable_key().expose_secret() == "pk_test_abc");
                assert_eq!(config.sign_in_url(), "/sign-in");
                assert_eq!(config.sign_up_url(), "/sign-up");
                assert_eq!(provider.child().name(), "App");
            }
            Mount::Blocked(_) => panic!("passed gate did not mount the app"),
        }
    }
}
